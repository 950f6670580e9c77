//! API client for communicating with the IncOps REST API.
//!
//! This module provides the `ApiClient` struct for the login call and for
//! authenticated requests against protected endpoints.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::auth::{Credentials, SessionUser};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

const LOGIN_PATH: &str = "/api/login";

const PROFILE_PATH: &str = "/api/profile";

/// HTTP request timeout in seconds.
/// A hung backend surfaces as a network error instead of blocking the form.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shown when a rejection carries no usable `error` field
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Successful body of `POST /api/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// API client for the IncOps backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client for the given base URL (e.g. `http://localhost:3001`)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Post credentials to the login endpoint.
    ///
    /// The body is parsed as JSON whatever the status. A non-2xx status
    /// becomes `ApiError::Rejected` carrying the server's `error` field.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Login response received");

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "login body is not JSON ({}): {}",
                e,
                ApiError::truncate_body(&body)
            ))
        })?;

        if status.is_success() {
            serde_json::from_value(data)
                .map_err(|e| ApiError::InvalidResponse(format!("login response: {}", e)))
        } else {
            Err(ApiError::Rejected(Self::rejection_message(&data)))
        }
    }

    fn rejection_message(data: &Value) -> String {
        data.get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string()
    }

    fn auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::InvalidResponse("token is not a valid header value".into()))?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Hit the profile endpoint and report only the status code
    pub async fn profile_status(&self) -> Result<StatusCode, ApiError> {
        let response = self
            .client
            .get(self.url(PROFILE_PATH))
            .headers(self.auth_headers()?)
            .send()
            .await?;
        Ok(response.status())
    }

    /// Fetch the authenticated user's profile
    pub async fn profile(&self) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(PROFILE_PATH))
            .headers(self.auth_headers()?)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("profile response: {}", e)))
    }
}
