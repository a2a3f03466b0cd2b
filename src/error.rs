//! Error types for the access layer.
//!
//! Failures propagate transparently to the immediate caller: no retry, no
//! translation beyond the variant, no logging of response bodies. HTTP status
//! codes are deliberately not an error source here; a 4xx/5xx response whose
//! body decodes is still returned to the caller as success.

use thiserror::Error;

/// Errors surfaced by [`crate::RestClient`] and [`crate::BlobUrlService`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, TLS, body read, ...).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Response body did not decode as the caller's expected JSON shape.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Invalid client configuration (e.g. malformed base URL or timeout).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
