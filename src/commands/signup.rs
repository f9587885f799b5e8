//! Signup command - Runs one sign-up through the controller.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{Controller, HttpRequest, ResponseBody, SignUpRequest};
use crate::cli::SignupArgs;
use crate::config::Config;
use crate::domain::AccountRecord;
use crate::errors::{AppError, AppResult};
use crate::infra::InMemoryAccountStore;
use crate::services::Services;

/// Printed form of a controller response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommandOutput<'a> {
    status_code: u16,
    body: &'a ResponseBody<AccountRecord>,
}

/// Execute the signup command.
///
/// Returns whether the controller answered with a success status.
pub async fn execute(args: SignupArgs, config: Config) -> AppResult<bool> {
    let store = Arc::new(InMemoryAccountStore::new());
    let controller = Services::from_config(&config, store).signup_controller();

    let response = controller
        .handle(HttpRequest::new(SignUpRequest::from(args)))
        .await;
    tracing::debug!(status = %response.status_code, "Sign-up handled");

    let output = serde_json::to_string_pretty(&CommandOutput {
        status_code: response.status_code.as_u16(),
        body: &response.body,
    })
    .map_err(|e| AppError::internal(format!("Failed to encode response: {}", e)))?;
    println!("{}", output);

    Ok(response.is_success())
}
