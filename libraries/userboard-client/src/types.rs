//! Client configuration.

use userboard_core::AppConfig;

/// Configuration for connecting to the users service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service (e.g. "http://localhost:5000")
    pub url: String,
}

impl ClientConfig {
    /// Create a new client config for the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl From<&AppConfig> for ClientConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone())
    }
}
