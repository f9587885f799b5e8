//! Sign-up API - Account registration behind injectable ports
//!
//! A controller validates a sign-up request, asks an email validator
//! whether the address is acceptable, and hands the account data to a
//! use case that hashes the password and stores the account.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Account types and ports (hasher, email validator, repository)
//! - **services**: Use cases and the service container
//! - **infra**: Port adapters (Argon2, `validator`, in-memory store)
//! - **api**: Controllers, request/response shapes, client errors
//! - **errors**: Internal error type
//!
//! # CLI Usage
//!
//! ```bash
//! cargo run -- signup --name Ada --email ada@example.com \
//!     --password hunter22 --password-confirmation hunter22
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{Controller, SignUpController};
pub use config::Config;
pub use domain::{AccountRecord, AddAccountInput};
pub use errors::{AppError, AppResult};
