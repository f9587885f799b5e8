//! Domain ports - Capabilities the core depends on but does not implement.
//!
//! Adapters in [`crate::infra`] implement these traits. Services and
//! controllers only ever hold them as `Arc<dyn Trait>`, so tests can
//! inject mocks through constructors.

use async_trait::async_trait;

use super::{AccountRecord, AddAccountInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way password hashing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Hasher: Send + Sync {
    /// Hash `plain_text`, returning an opaque encoded hash.
    async fn hash(&self, plain_text: &str) -> AppResult<String>;
}

/// Email syntax validation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EmailValidator: Send + Sync {
    /// Check whether `email` is acceptable.
    ///
    /// `Err` means the validator itself failed, not that the email is bad.
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}

/// Account persistence.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Store a new account. `input.password` is already hashed.
    async fn add(&self, input: AddAccountInput) -> AppResult<AccountRecord>;
}
