//! REST helpers for the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: the call reports [`ApiError::Unavailable`]
//! since the session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures stay distinct here so logs can tell
//! them apart; the guard collapses them into one denial.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::IsLoggedInResponse;
use crate::guard::AuthCheck;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("response parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("not available on server")]
    Unavailable,
}

/// Decode an is-logged-in body.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body is not JSON or `Response` is not a string.
pub fn parse_is_logged_in(body: &str) -> Result<IsLoggedInResponse, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Ask the auth backend whether the browser session is logged in.
///
/// The session cookie is sent even when `url` is cross-origin.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// does not decode.
pub async fn is_logged_in(url: &str) -> Result<IsLoggedInResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_is_logged_in(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// [`AuthCheck`] backed by the real is-logged-in endpoint.
#[derive(Clone, Debug)]
pub struct RestClient {
    endpoint: String,
}

impl RestClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl AuthCheck for RestClient {
    fn is_logged_in(&self) -> impl Future<Output = Result<IsLoggedInResponse, ApiError>> {
        is_logged_in(&self.endpoint)
    }
}
