//! REST client for the edu services API.
//!
//! Every operation is a single GET round-trip: build the URL, send, decode.
//! Status codes are deliberately not inspected; a 4xx/5xx response whose body
//! decodes is returned to the caller as success, matching the server's
//! error-in-body convention. Callers wanting cancellation drop the future.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::url::UrlBuilder;

/// HTTP client issuing typed GET requests against the versioned REST API.
///
/// Cheap to clone and share; the underlying `reqwest::Client` pools
/// connections internally. No state is carried across calls.
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: reqwest::Client,
    urls: UrlBuilder,
}

impl RestClient {
    /// Create a client from the given configuration.
    ///
    /// Fails with [`ClientError::ConfigurationError`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("edu-services-client/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http_client = builder.build().map_err(|e| {
            ClientError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            http_client,
            urls: UrlBuilder::new(config.base_url),
        })
    }

    /// The URL builder backing this client.
    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Fetch a single resource by id: `GET {base}/{suffix}/{id}`.
    ///
    /// The body is decoded as JSON into `T`; a body that does not match `T`
    /// fails with [`ClientError::JsonError`].
    pub async fn fetch_by_id<T>(&self, suffix: Option<&str>, id: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.urls.build(suffix), id);
        self.get_json(&url).await
    }

    /// Fetch a full collection: `GET {base}/{suffix}`, same decode contract
    /// as [`RestClient::fetch_by_id`].
    pub async fn fetch_all<T>(&self, suffix: Option<&str>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.urls.build(suffix);
        self.get_json(&url).await
    }

    /// Fetch a plain-text endpoint, optionally with a bearer token.
    ///
    /// Text endpoints are addressed through the single-resource URL shape
    /// with an empty id, so the request URL carries a trailing slash:
    /// `GET {base}/{suffix}/`. The body is returned verbatim, never
    /// JSON-decoded.
    pub async fn fetch_text(
        &self,
        suffix: Option<&str>,
        token: Option<&str>,
    ) -> Result<String, ClientError> {
        let url = format!("{}/", self.urls.build(suffix));
        debug!(url = %url, "GET text");

        let mut request = self.http_client.get(&url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = request.send().await?;
        Ok(response.text().await?)
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "GET json");
        let response = self.http_client.get(url).send().await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
