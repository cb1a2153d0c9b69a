//! Upstream RAG service configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upstream completion service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the RAG service (e.g. http://172.19.99.179)
    pub base_url: String,

    /// API key sent as a Bearer token
    api_key: Secret<String>,

    /// Chat/assistant identifier in the completions path
    pub chat_id: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Creates a configuration from explicit values (tests, wiring).
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Secret::new(api_key.into()),
            chat_id: chat_id.into(),
            timeout_secs: default_timeout(),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Exposes the API key (for building the Authorization header).
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("UPSTREAM_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidUpstreamUrl);
        }
        if self.api_key().is_empty() {
            return Err(ValidationError::MissingRequired("UPSTREAM_API_KEY"));
        }
        if self.chat_id.is_empty() {
            return Err(ValidationError::MissingRequired("UPSTREAM_CHAT_ID"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    60
}
