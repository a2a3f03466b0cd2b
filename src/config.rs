//! Client configuration.
//!
//! The base URL is an injected configuration value chosen once at
//! construction, never mutated at runtime. [`Environment`] maps the
//! deployment flag to the well-known base URLs; tests inject a mock-server
//! base URL instead of touching process environment variables.

use serde::{Deserialize, Serialize};

/// Base URL of the production edu services API.
pub const PRODUCTION_BASE_URL: &str = "https://services.edu.exokomodo.com/api/v1";

/// Base URL of a locally running edu services API.
pub const LOCAL_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Process environment variable consulted by [`Environment::detect`].
pub const ENV_VAR: &str = "EDU_SERVICES_ENV";

/// Deployment environment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Hosted production deployment.
    Production,
    /// Local development backend.
    Local,
}

impl Environment {
    /// Resolve the environment from `EDU_SERVICES_ENV`.
    ///
    /// `"production"` selects [`Environment::Production`]; any other value,
    /// or an unset variable, selects [`Environment::Local`].
    pub fn detect() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) if value == "production" => Self::Production,
            _ => Self::Local,
        }
    }

    /// The fixed base URL for this environment.
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Local => LOCAL_BASE_URL,
        }
    }
}

/// Configuration for [`crate::RestClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL all request URLs are derived from.
    pub base_url: String,
    /// Transport timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: LOCAL_BASE_URL.to_string(),
            timeout: Some(30),
        }
    }
}

impl ClientConfig {
    /// Configuration targeting the given deployment environment.
    pub fn for_environment(env: Environment) -> Self {
        Self {
            base_url: env.base_url().to_string(),
            ..Default::default()
        }
    }

    /// Override the base URL (used by tests to point at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the transport timeout in seconds.
    pub const fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(
            Environment::Production.base_url(),
            "https://services.edu.exokomodo.com/api/v1"
        );
        assert_eq!(Environment::Local.base_url(), "http://localhost:5000/api/v1");
    }

    #[test]
    fn test_default_targets_local() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, LOCAL_BASE_URL);
        assert_eq!(config.timeout, Some(30));
    }

    #[test]
    fn test_for_environment() {
        let config = ClientConfig::for_environment(Environment::Production);
        assert_eq!(config.base_url, PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_local_collection_url() {
        let urls = crate::url::UrlBuilder::new(Environment::Local.base_url());
        assert_eq!(
            urls.build(Some("users")),
            "http://localhost:5000/api/v1/users"
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9999/api/v1")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://127.0.0.1:9999/api/v1");
        assert_eq!(config.timeout, Some(5));
    }
}
