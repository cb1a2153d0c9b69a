//! Completion Client Port - Interface to the upstream RAG completion service.
//!
//! The upstream is opaque: it receives a question (plus an optional session
//! id) and returns a body in one of several encodings. This port deliberately
//! returns the raw body text and leaves shape normalization to
//! [`crate::domain::extract`], because the encoding is not knowable at the
//! transport layer.

use async_trait::async_trait;

use crate::domain::turn::UpstreamPayload;

/// Port for upstream completion calls.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one completion request and returns the raw response body.
    ///
    /// A 2xx response is returned verbatim regardless of how malformed its
    /// body is; everything else is a [`CompletionError`].
    async fn complete(&self, payload: &UpstreamPayload) -> Result<String, CompletionError>;
}

/// Upstream completion call failures.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The upstream answered with a non-2xx status.
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The request exceeded the configured timeout.
    #[error("upstream request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Transport-level failure (DNS, connect, TLS, aborted body).
    #[error("network error: {0}")]
    Network(String),
}

impl CompletionError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Diagnostic detail suitable for an error response body.
    ///
    /// For a status failure this is the upstream's raw body; otherwise the
    /// error's display form.
    pub fn details(&self) -> String {
        match self {
            Self::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
