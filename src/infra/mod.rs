//! Infrastructure layer - Adapters for the domain ports
//!
//! - Password hashing (Argon2)
//! - Email syntax validation
//! - Account repositories

pub mod email_validator;
pub mod hasher;
pub mod repositories;

pub use email_validator::EmailValidatorAdapter;
pub use hasher::Argon2Hasher;
pub use repositories::InMemoryAccountStore;
