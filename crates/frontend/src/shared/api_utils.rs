//! API utilities for frontend-backend communication.

use gloo_net::http::Response;
use thiserror::Error;

use crate::system::auth::storage;

/// Failure taxonomy for backend calls. Every failure is terminal for the
/// user action that triggered it; there are no retries.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// HTTP 401 from any authenticated call. By the time the caller sees
    /// this the stored token is already gone; resetting the auth state is
    /// the caller's move.
    #[error("session expired")]
    AuthExpired,
    #[error("HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("bad response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests.
///
/// Constructed from the current window location, using port 8001 for the
/// backend server. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8001", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Map a response status to the error taxonomy. A 401 clears the stored
/// token here in the data layer; navigation back to the login screen is
/// left to the presentation layer.
pub fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    match response.status() {
        401 => {
            storage::remove_token();
            Err(ApiError::AuthExpired)
        }
        status => Err(ApiError::Status(status)),
    }
}
