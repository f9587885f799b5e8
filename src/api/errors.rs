//! Client-facing errors returned by controllers.

use axum::http::StatusCode;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors a controller reports back to the caller.
///
/// `ServerError` carries no detail. The cause is logged where it is caught.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    #[error("Internal server error")]
    ServerError,
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    param: Option<&'a str>,
}

impl ApiError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        ApiError::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        ApiError::InvalidParam(field.into())
    }

    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingParam(_) => "MISSING_PARAM",
            ApiError::InvalidParam(_) => "INVALID_PARAM",
            ApiError::ServerError => "SERVER_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParam(_) | ApiError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            ApiError::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Name of the offending request field, if any
    pub fn param(&self) -> Option<&str> {
        match self {
            ApiError::MissingParam(field) | ApiError::InvalidParam(field) => Some(field.as_str()),
            ApiError::ServerError => None,
        }
    }
}

impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
                param: self.param(),
            },
        }
        .serialize(serializer)
    }
}
