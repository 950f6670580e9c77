//! REST API client module for the IncOps backend.
//!
//! This module provides the `ApiClient` for the login endpoint and the
//! protected profile endpoint. Protected calls use a bearer token issued
//! by `POST /api/login`.

pub mod client;
pub mod error;

pub use client::{ApiClient, LoginResponse};
pub use error::ApiError;
