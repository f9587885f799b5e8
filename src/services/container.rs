//! Service Container - Wires adapters into use cases and controllers.
//!
//! SOLID (DIP): Everything handed out is a trait object, so callers
//! never see the concrete adapters.

use std::sync::Arc;

use super::{AccountCreator, AddAccount};
use crate::api::SignUpController;
use crate::config::Config;
use crate::domain::{AddAccountRepository, EmailValidator};
use crate::infra::{Argon2Hasher, EmailValidatorAdapter};

/// Concrete service container
#[derive(Clone)]
pub struct Services {
    add_account: Arc<dyn AddAccount>,
    email_validator: Arc<dyn EmailValidator>,
}

impl Services {
    /// Create a container from already-built collaborators
    pub fn new(add_account: Arc<dyn AddAccount>, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            add_account,
            email_validator,
        }
    }

    /// Create a container with the default adapters, storing accounts in
    /// `repository`.
    pub fn from_config(config: &Config, repository: Arc<dyn AddAccountRepository>) -> Self {
        let hasher = Arc::new(Argon2Hasher::new(config.hash_cost));
        let add_account = Arc::new(AccountCreator::new(hasher, repository));

        Self {
            add_account,
            email_validator: Arc::new(EmailValidatorAdapter::new()),
        }
    }

    /// Build a sign-up controller over this container's collaborators
    pub fn signup_controller(&self) -> SignUpController {
        SignUpController::new(self.email_validator.clone(), self.add_account.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Controller, HttpRequest, ResponseBody, SignUpRequest};
    use crate::config::HashCost;
    use crate::domain::{AccountRecord, MockEmailValidator};
    use crate::infra::InMemoryAccountStore;
    use crate::services::MockAddAccount;
    use axum::http::StatusCode;

    fn cheap_config() -> Config {
        Config {
            hash_cost: HashCost {
                memory_kib: 64,
                iterations: 1,
                parallelism: 1,
            },
        }
    }

    #[tokio::test]
    async fn test_from_config_wires_working_controller() {
        let store = Arc::new(InMemoryAccountStore::new());
        let services = Services::from_config(&cheap_config(), store.clone());

        let response = services
            .signup_controller()
            .handle(HttpRequest::new(SignUpRequest::new(
                "any_name",
                "any_email@mail.com",
                "any_password",
                "any_password",
            )))
            .await;

        assert_eq!(response.status_code, StatusCode::OK);
        let ResponseBody::Data(account) = response.body else {
            panic!("expected account body");
        };
        assert_ne!(account.password, "any_password");
        assert_eq!(store.get(&account.id).unwrap(), Some(account));
    }

    #[tokio::test]
    async fn test_new_uses_injected_collaborators() {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().times(1).returning(|_| Ok(true));
        let mut add_account = MockAddAccount::new();
        add_account.expect_add().times(1).returning(|input| {
            Ok(AccountRecord::from_input("stub_id", input))
        });

        let services = Services::new(Arc::new(add_account), Arc::new(validator));
        let response = services
            .signup_controller()
            .handle(HttpRequest::new(SignUpRequest::new(
                "any_name",
                "any_email@mail.com",
                "any_password",
                "any_password",
            )))
            .await;

        assert_eq!(response.status_code, StatusCode::OK);
    }
}
