//! Controllers - Translate requests into use-case calls and back.

use async_trait::async_trait;

use super::http::{HttpRequest, HttpResponse};

pub mod signup;

pub use signup::SignUpController;

/// A request/response boundary component.
///
/// Implementations never fail: every outcome, including collaborator
/// failures, is expressed as an [`HttpResponse`].
#[async_trait]
pub trait Controller: Send + Sync {
    type Request: Send;
    type Response: Send;

    async fn handle(&self, request: HttpRequest<Self::Request>) -> HttpResponse<Self::Response>;
}
