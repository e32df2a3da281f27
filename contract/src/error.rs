//! The one error class the landing page acknowledges: fetch/parse failure.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and malformed bodies all land here.
//! Landing sections discard these at their own boundary; the diagnostics page
//! and the CLI print them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;

/// A failed backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {0}")]
    Status(u16),
    /// The body was not the JSON shape expected for this call.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// No HTTP transport is available in this build (server-side render).
    #[error("backend calls are only made from the browser")]
    Unavailable,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Classify a completed response.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses, otherwise
/// [`ApiError::Decode`] if `body` does not parse as `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    expect_success(status)?;
    Ok(serde_json::from_str(body)?)
}

/// Accept any 2xx status, ignoring the body.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses.
pub fn expect_success(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}
