//! API layer - Controllers and HTTP-shaped values
//!
//! This module contains the presentation concerns:
//! - Controllers
//! - Request and response shapes
//! - Client-facing errors

pub mod controllers;
pub mod errors;
pub mod http;

pub use controllers::{Controller, SignUpController};
pub use errors::ApiError;
pub use http::{HttpRequest, HttpResponse, ResponseBody, SignUpRequest};
