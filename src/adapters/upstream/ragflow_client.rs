//! RAGFlow Client - Implementation of CompletionClient for a RAGFlow-style API.
//!
//! Posts non-streaming completion requests to
//! `<base>/api/v1/chats/<chat_id>/completions` with Bearer authentication and
//! returns the raw response body. The upstream's response encoding varies, so
//! no parsing happens here; see [`crate::domain::extract`].
//!
//! # Configuration
//!
//! ```ignore
//! let config = RagflowClientConfig::new(api_key, "http://rag.internal", chat_id)
//!     .with_timeout(Duration::from_secs(30));
//!
//! let client = RagflowClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::domain::turn::UpstreamPayload;
use crate::ports::{CompletionClient, CompletionError};

/// Configuration for the RAGFlow client.
#[derive(Debug, Clone)]
pub struct RagflowClientConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL of the RAGFlow service.
    pub base_url: String,
    /// Chat/assistant identifier in the completions path.
    pub chat_id: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RagflowClientConfig {
    /// Creates a new configuration with the given credentials.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: base_url.into(),
            chat_id: chat_id.into(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl From<&UpstreamConfig> for RagflowClientConfig {
    fn from(config: &UpstreamConfig) -> Self {
        Self::new(config.api_key(), config.base_url.clone(), config.chat_id.clone())
            .with_timeout(config.timeout())
    }
}

/// RAGFlow completion client.
pub struct RagflowClient {
    config: RagflowClientConfig,
    client: Client,
}

impl RagflowClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: RagflowClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the completions endpoint URL.
    fn completions_url(&self) -> String {
        format!(
            "{}/api/v1/chats/{}/completions",
            self.config.base_url.trim_end_matches('/'),
            self.config.chat_id
        )
    }
}

#[async_trait]
impl CompletionClient for RagflowClient {
    async fn complete(&self, payload: &UpstreamPayload) -> Result<String, CompletionError> {
        tracing::debug!(
            question = %payload.question,
            session_id = ?payload.session_id,
            "sending completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key()),
            )
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    CompletionError::network(format!("Connection failed: {}", e))
                } else {
                    CompletionError::network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::network(format!("Failed to read body: {}", e)))?;

        tracing::debug!(status = status.as_u16(), body = %body, "upstream raw response");

        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = RagflowClientConfig::new("test-key", "http://rag.internal", "chat-1")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.base_url, "http://rag.internal");
        assert_eq!(config.chat_id, "chat-1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn completions_url_joins_cleanly() {
        let client = RagflowClient::new(RagflowClientConfig::new(
            "key",
            "http://rag.internal/",
            "abc123",
        ));
        assert_eq!(
            client.completions_url(),
            "http://rag.internal/api/v1/chats/abc123/completions"
        );
    }

    #[test]
    fn config_from_upstream_section() {
        let upstream = UpstreamConfig::new("http://rag.internal", "env-key", "chat-9")
            .with_timeout_secs(15);
        let config = RagflowClientConfig::from(&upstream);

        assert_eq!(config.base_url, "http://rag.internal");
        assert_eq!(config.chat_id, "chat-9");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.api_key(), "env-key");
    }

    #[test]
    fn api_key_is_redacted_in_debug() {
        let config = RagflowClientConfig::new("super-secret", "http://rag.internal", "c");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
