//! End-to-end sign-up tests with the real adapters.
//!
//! Argon2 runs with a small cost to keep the suite fast.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::http::StatusCode;

use signup_api::api::{ApiError, Controller, HttpRequest, ResponseBody, SignUpRequest};
use signup_api::config::{Config, HashCost};
use signup_api::infra::InMemoryAccountStore;
use signup_api::services::Services;

fn cheap_config() -> Config {
    Config {
        hash_cost: HashCost {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        },
    }
}

fn setup() -> (Services, Arc<InMemoryAccountStore>) {
    let store = Arc::new(InMemoryAccountStore::new());
    let services = Services::from_config(&cheap_config(), store.clone());
    (services, store)
}

#[tokio::test]
async fn test_signup_stores_hashed_password() {
    let (services, store) = setup();
    let controller = services.signup_controller();

    let response = controller
        .handle(HttpRequest::new(SignUpRequest::new(
            "valid_name",
            "valid_email@email.com",
            "valid_password",
            "valid_password",
        )))
        .await;

    assert_eq!(response.status_code, StatusCode::OK);
    let ResponseBody::Data(account) = response.body else {
        panic!("expected account body");
    };

    assert_eq!(account.name, "valid_name");
    assert_eq!(account.email, "valid_email@email.com");
    assert_ne!(account.password, "valid_password");

    let stored = store.get(&account.id).unwrap().expect("account stored");
    assert_eq!(stored, account);

    let parsed = PasswordHash::new(&stored.password).unwrap();
    assert!(Argon2::default()
        .verify_password(b"valid_password", &parsed)
        .is_ok());
}

#[tokio::test]
async fn test_signup_rejects_malformed_email() {
    let (services, store) = setup();

    let response = services
        .signup_controller()
        .handle(HttpRequest::new(SignUpRequest::new(
            "valid_name",
            "not-an-email",
            "valid_password",
            "valid_password",
        )))
        .await;

    assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        ResponseBody::Error(ApiError::invalid_param("email"))
    );
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_missing_email_yields_missing_param() {
    let (services, store) = setup();
    let body = SignUpRequest {
        email: None,
        ..SignUpRequest::new("valid_name", "unused", "valid_password", "valid_password")
    };

    let response = services
        .signup_controller()
        .handle(HttpRequest::new(body))
        .await;

    assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        ResponseBody::Error(ApiError::missing_param("email"))
    );
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_requests_are_independent() {
    let (services, store) = setup();
    let controller = services.signup_controller();

    let first = controller
        .handle(HttpRequest::new(SignUpRequest::new(
            "first", "first@mail.com", "password_one", "password_one",
        )))
        .await;
    let second = controller
        .handle(HttpRequest::new(SignUpRequest::new(
            "second", "second@mail.com", "password_two", "password_two",
        )))
        .await;

    let (ResponseBody::Data(first), ResponseBody::Data(second)) = (first.body, second.body) else {
        panic!("expected two accounts");
    };
    assert_ne!(first.id, second.id);
    assert_eq!(store.len().unwrap(), 2);
}
