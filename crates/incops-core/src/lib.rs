//! Core library for the IncOps login client.
//!
//! - `api`: HTTP client for `/api/login` and `/api/profile`
//! - `auth`: credentials, the `Session` record and its storage
//! - `config`: on-disk configuration with environment overrides
//! - `session_client`: the login flow driven through a `LoginView`

pub mod api;
pub mod auth;
pub mod config;
pub mod session_client;

pub use api::{ApiClient, ApiError};
pub use auth::{Credentials, FileSessionStore, MemorySessionStore, Session, SessionStore, SessionUser};
pub use config::Config;
pub use session_client::{LoginOutcome, LoginView, Page, SessionClient, SubmitState};
