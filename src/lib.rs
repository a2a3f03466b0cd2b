//! edu-services-client
//!
//! Typed REST access layer for the exokomodo edu services API (`/api/v1`).
//! Provides URL construction, JSON-decoding GET dispatch, and a presigned
//! blob-URL helper. One network round-trip per call; no retries, no caching,
//! no status-code interpretation.
#![deny(unsafe_code)]

pub mod blob;
pub mod client;
pub mod config;
pub mod error;
pub mod url;

pub use blob::BlobUrlService;
pub use client::RestClient;
pub use config::{ClientConfig, Environment};
pub use error::ClientError;
pub use url::UrlBuilder;

/// Convenience re-exports for callers.
pub mod prelude {
    pub use crate::blob::BlobUrlService;
    pub use crate::client::RestClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::error::ClientError;
}
