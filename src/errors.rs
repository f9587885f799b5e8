//! Centralized error handling.
//!
//! Internal failures raised by ports, adapters and the use case. None of
//! these are shown to clients: the controller turns every one of them into
//! a generic server error (see [`crate::api::ApiError`]).

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Collaborator failures
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Account persistence failed: {0}")]
    Persistence(String),

    #[error("Email validation failed: {0}")]
    EmailValidation(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Hashing(_) => "HASHING_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::EmailValidation(_) => "EMAIL_VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn hashing(msg: impl Into<String>) -> Self {
        AppError::Hashing(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn email_validation(msg: impl Into<String>) -> Self {
        AppError::EmailValidation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AppError::Hashing(e.to_string())
    }
}

impl From<argon2::Error> for AppError {
    fn from(e: argon2::Error) -> Self {
        AppError::Hashing(e.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Background task failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_pick_variant() {
        assert!(matches!(AppError::hashing("x"), AppError::Hashing(_)));
        assert!(matches!(AppError::persistence("x"), AppError::Persistence(_)));
        assert!(matches!(
            AppError::email_validation("x"),
            AppError::EmailValidation(_)
        ));
        assert!(matches!(AppError::internal("x"), AppError::Internal(_)));
    }

    #[test]
    fn test_display_includes_detail() {
        let err = AppError::persistence("connection reset");
        assert_eq!(err.to_string(), "Account persistence failed: connection reset");
        assert_eq!(err.code(), "PERSISTENCE_ERROR");
    }

    #[test]
    fn test_argon2_error_maps_to_hashing() {
        let err: AppError = argon2::Error::MemoryTooLittle.into();
        assert!(matches!(err, AppError::Hashing(_)));
    }
}
