//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::api::SignUpRequest;

/// Sign-up API - run sign-ups through the controller from the command line
#[derive(Parser, Debug)]
#[command(name = "signup-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register one account and print the HTTP-shaped response
    Signup(SignupArgs),
}

/// Arguments for the signup command.
///
/// All optional so that incomplete requests reach the controller as-is.
#[derive(Parser, Debug, Default)]
pub struct SignupArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Password
    #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Password confirmation
    #[arg(long)]
    pub password_confirmation: Option<String>,
}

impl From<SignupArgs> for SignUpRequest {
    fn from(args: SignupArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            password: args.password,
            password_confirmation: args.password_confirmation,
        }
    }
}
