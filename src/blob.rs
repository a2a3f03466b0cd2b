//! Presigned blob-URL retrieval.

use crate::client::RestClient;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Requests presigned URLs for stored blobs.
///
/// The blob endpoint returns a bare URL string rather than JSON, so this
/// service goes through [`RestClient::fetch_text`] and hands back the raw
/// body. That asymmetry with the JSON-returning fetches is part of the API
/// surface, not something this layer papers over.
#[derive(Debug, Clone)]
pub struct BlobUrlService {
    rest: RestClient,
}

impl BlobUrlService {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Service backed by a fresh [`RestClient`] for the given configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(RestClient::new(config)?))
    }

    /// Fetch the presigned URL for `id`: `GET {base}/blob?url={id}/`,
    /// forwarding `token` as a bearer credential when present.
    ///
    /// Returns the response body verbatim; the endpoint answers with a bare
    /// URL string, not JSON.
    pub async fn fetch_presigned_url(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<String, ClientError> {
        let suffix = format!("blob?url={id}");
        self.rest.fetch_text(Some(&suffix), token).await
    }
}
