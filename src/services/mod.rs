//! Application services layer - Use cases.
//!
//! Services orchestrate ports to fulfil a business operation. They depend
//! on abstractions (traits) for dependency inversion.

mod add_account;
pub mod container;

// Service Container
pub use container::Services;

// Use case traits and implementations
pub use add_account::{AccountCreator, AddAccount};

#[cfg(any(test, feature = "test-utils"))]
pub use add_account::MockAddAccount;
