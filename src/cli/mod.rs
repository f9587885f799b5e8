//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `signup` - Register one account through the sign-up controller

pub mod args;

pub use args::{Cli, Commands, SignupArgs};
