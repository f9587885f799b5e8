//! Transport-neutral request and response shapes.
//!
//! Controllers take an [`HttpRequest`] and return an [`HttpResponse`].
//! `HttpResponse` converts into an axum response so any axum host can
//! return controller output directly.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::errors::ApiError;

/// Inbound sign-up payload.
///
/// Every field is optional; presence is checked by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl SignUpRequest {
    /// Request with every field present.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            password_confirmation: Some(password_confirmation.into()),
        }
    }
}

/// Request handed to a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest<B> {
    pub body: B,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

/// Response payload: either data or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Data(T),
    Error(ApiError),
}

/// Response produced by a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<T> {
    pub status_code: StatusCode,
    pub body: ResponseBody<T>,
}

impl<T> HttpResponse<T> {
    /// 200 with data
    pub fn ok(data: T) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: ResponseBody::Data(data),
        }
    }

    /// Error response, status taken from the error
    pub fn error(error: ApiError) -> Self {
        Self {
            status_code: error.status(),
            body: ResponseBody::Error(error),
        }
    }

    /// Generic 500
    pub fn server_error() -> Self {
        Self::error(ApiError::ServerError)
    }

    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }
}

impl<T: Serialize> IntoResponse for HttpResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}
