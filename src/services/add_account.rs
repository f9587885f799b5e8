//! Add-account use case - Hashes the password and stores the account.
//!
//! SOLID (SRP): Orchestration only. Hashing and storage sit behind ports.
//! Failures from either port propagate unchanged; translating them is
//! the controller's job.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{AccountRecord, AddAccountInput, AddAccountRepository, Hasher};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Add-account use case trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create an account from plaintext sign-up data
    async fn add(&self, input: AddAccountInput) -> AppResult<AccountRecord>;
}

/// Concrete implementation of AddAccount over a hasher and a repository.
pub struct AccountCreator {
    hasher: Arc<dyn Hasher>,
    repository: Arc<dyn AddAccountRepository>,
}

impl AccountCreator {
    /// Create new use case instance
    pub fn new(hasher: Arc<dyn Hasher>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self { hasher, repository }
    }
}

#[async_trait]
impl AddAccount for AccountCreator {
    async fn add(&self, input: AddAccountInput) -> AppResult<AccountRecord> {
        // Plaintext must never reach the repository
        let hashed_password = self.hasher.hash(&input.password).await?;
        let account = self
            .repository
            .add(input.with_hashed_password(hashed_password))
            .await?;

        tracing::info!(account_id = %account.id, "Account created");
        Ok(account)
    }
}
