//! Core data model for a single chat turn.
//!
//! These types are built fresh per inbound request and discarded when the
//! response leaves the gateway. The only durable state in the whole system is
//! the upstream session id, which is round-tripped through the client and
//! never minted here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An inbound chat turn as received from the widget.
///
/// `message` is optional at this level so the orchestrator can reject a
/// missing or empty message itself rather than relying on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatTurnRequest {
    /// The user's message text.
    pub message: Option<String>,
    /// Opaque continuation token from a previous upstream response.
    pub session_id: Option<String>,
}

impl ChatTurnRequest {
    /// Creates a request for a fresh session.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            session_id: None,
        }
    }

    /// Attaches a session id from a previous turn.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// The body sent to the upstream completions endpoint.
///
/// `session_id` is omitted from the wire entirely when absent (not sent as
/// null): the upstream treats field presence as "continue this session".
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamPayload {
    /// The (possibly context-augmented) question.
    pub question: String,
    /// Always false: the gateway consumes complete bodies, never streams.
    pub stream: bool,
    /// Continuation token, present only when previously issued upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl UpstreamPayload {
    /// Builds a non-streaming payload for the given question.
    pub fn new(question: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            question: question.into(),
            stream: false,
            session_id,
        }
    }

    /// Returns a copy of this payload continuing the given session.
    pub fn continuing(&self, session_id: impl Into<String>) -> Self {
        Self {
            question: self.question.clone(),
            stream: false,
            session_id: Some(session_id.into()),
        }
    }
}

/// The canonical result of one upstream call, whatever encoding the upstream
/// chose for its response.
///
/// `answer` is always sanitized text by the time a value of this type exists;
/// an empty answer is a valid "no answer available" result, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedResult {
    /// Sanitized answer text, possibly empty.
    pub answer: String,
    /// Session id issued by the upstream, if any.
    pub session_id: Option<String>,
    /// Opaque citation/reference payload, passed through untouched.
    pub reference: Option<Value>,
}

impl ExtractedResult {
    /// The "no answer available" result.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The response returned to the widget. The only artifact crossing the system
/// boundary outward.
#[derive(Debug, Clone, Default)]
pub struct ChatTurnResponse {
    /// Polished answer text, or empty for a session-initialization turn.
    pub answer: String,
    /// Session id to round-trip on the next turn.
    pub session_id: Option<String>,
    /// Opaque reference payload from the upstream.
    pub reference: Option<Value>,
    /// Raw upstream body, attached only to the fallback response for
    /// diagnostics.
    pub raw: Option<Value>,
}

/// A bounded block of text scraped from the configured live-context source.
///
/// Ephemeral: concatenated into the outbound question and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveContextBlock {
    /// Where the text came from.
    pub source_url: String,
    /// Condensed page text, at most a few bounded chunks.
    pub text: String,
}

impl LiveContextBlock {
    /// Renders the block as it appears inside the outbound question.
    pub fn render(&self) -> String {
        format!("Source: {}\n{}", self.source_url, self.text)
    }
}
