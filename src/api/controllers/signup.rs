//! Sign-up controller.
//!
//! Checks run in a fixed order and stop at the first failure:
//! field presence, password confirmation, email validity, then account
//! creation. Collaborator failures become a bare 500.

use async_trait::async_trait;
use std::sync::Arc;

use super::Controller;
use crate::api::errors::ApiError;
use crate::api::http::{HttpRequest, HttpResponse, SignUpRequest};
use crate::config::{FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRMATION};
use crate::domain::{AccountRecord, AddAccountInput, EmailValidator};
use crate::errors::AppError;
use crate::services::AddAccount;

/// Handles sign-up requests
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn sign_up(&self, body: SignUpRequest) -> Result<AccountRecord, ApiError> {
        let name = required(body.name, FIELD_NAME)?;
        let email = required(body.email, FIELD_EMAIL)?;
        let password = required(body.password, FIELD_PASSWORD)?;
        let password_confirmation =
            required(body.password_confirmation, FIELD_PASSWORD_CONFIRMATION)?;

        if password != password_confirmation {
            return Err(rejected(ApiError::invalid_param(FIELD_PASSWORD_CONFIRMATION)));
        }

        let email_is_valid = self
            .email_validator
            .is_valid(&email)
            .map_err(|e| server_error("email validation", e))?;
        if !email_is_valid {
            return Err(rejected(ApiError::invalid_param(FIELD_EMAIL)));
        }

        self.add_account
            .add(AddAccountInput {
                name,
                email,
                password,
            })
            .await
            .map_err(|e| server_error("add account", e))
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Request = SignUpRequest;
    type Response = AccountRecord;

    async fn handle(&self, request: HttpRequest<SignUpRequest>) -> HttpResponse<AccountRecord> {
        match self.sign_up(request.body).await {
            Ok(account) => HttpResponse::ok(account),
            Err(error) => HttpResponse::error(error),
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| rejected(ApiError::missing_param(field)))
}

fn rejected(error: ApiError) -> ApiError {
    tracing::debug!(code = error.code(), param = ?error.param(), "Sign-up request rejected");
    error
}

// The cause is logged here and dropped from the response
fn server_error(stage: &'static str, error: AppError) -> ApiError {
    tracing::error!(stage, code = error.code(), error = %error, "Sign-up failed");
    ApiError::ServerError
}
