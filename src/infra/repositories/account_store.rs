//! In-memory account repository.
//!
//! Keeps accounts in a process-local map. Useful for the CLI and for
//! exercising the full sign-up flow in tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AccountRecord, AddAccountInput, AddAccountRepository};
use crate::errors::{AppError, AppResult};

/// In-memory account store
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, AccountRecord>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored account by id.
    pub fn get(&self, id: &str) -> AppResult<Option<AccountRecord>> {
        let accounts = self.accounts.read().map_err(|e| {
            AppError::persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(accounts.get(id).cloned())
    }

    /// Number of stored accounts.
    pub fn len(&self) -> AppResult<usize> {
        let accounts = self.accounts.read().map_err(|e| {
            AppError::persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(accounts.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountStore {
    async fn add(&self, input: AddAccountInput) -> AppResult<AccountRecord> {
        let account = AccountRecord::from_input(Uuid::new_v4().to_string(), input);

        let mut accounts = self.accounts.write().map_err(|e| {
            AppError::persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        accounts.insert(account.id.clone(), account.clone());

        Ok(account)
    }
}
