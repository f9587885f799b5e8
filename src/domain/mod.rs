//! Domain layer - Core business entities and ports
//!
//! This module contains the account types and the capability traits
//! (ports) the application depends on, independent of infrastructure.

pub mod account;
pub mod ports;

pub use account::{AccountRecord, AddAccountInput};
pub use ports::{AddAccountRepository, EmailValidator, Hasher};

#[cfg(any(test, feature = "test-utils"))]
pub use ports::{MockAddAccountRepository, MockEmailValidator, MockHasher};
