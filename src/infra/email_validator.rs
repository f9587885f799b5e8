//! Email validation adapter backed by the `validator` crate.

use validator::ValidateEmail;

use crate::domain::EmailValidator;
use crate::errors::AppResult;

/// HTML5-style email syntax check.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_email() {
        let sut = EmailValidatorAdapter::new();
        assert!(sut.is_valid("valid_email@email.com").unwrap());
    }

    #[test]
    fn test_rejects_invalid_email() {
        let sut = EmailValidatorAdapter::new();
        assert!(!sut.is_valid("invalid_email").unwrap());
        assert!(!sut.is_valid("no-user@").unwrap());
        assert!(!sut.is_valid("").unwrap());
    }
}
