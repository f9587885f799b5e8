//! Repository layer - Data access implementations
//!
//! Concrete implementations of the account persistence port.

mod account_store;

pub use account_store::InMemoryAccountStore;
