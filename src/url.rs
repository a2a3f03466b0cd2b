//! Request URL construction.

/// Builds fully qualified request URLs from a fixed base URL and an optional
/// path suffix.
///
/// Suffix contents are not validated or escaped; callers own segment
/// well-formedness. Building never fails.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
}

impl UrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The base URL this builder derives request URLs from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `"{base}/"` when the suffix is absent or empty, `"{base}/{suffix}"`
    /// otherwise.
    pub fn build(&self, suffix: Option<&str>) -> String {
        match suffix {
            Some(suffix) if !suffix.is_empty() => format!("{}/{}", self.base_url, suffix),
            _ => format!("{}/", self.base_url),
        }
    }
}
