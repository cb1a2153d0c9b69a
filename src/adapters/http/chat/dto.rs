//! HTTP DTOs for the chat endpoint.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::turn::{ChatTurnRequest, ChatTurnResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Inbound chat request body.
///
/// `message` stays optional here so that a missing field reaches the
/// orchestrator's own validation (a uniform 400) instead of surfacing as a
/// deserialization error with a different shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's message.
    pub message: Option<String>,
    /// Session id from a previous response, if continuing a conversation.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl From<ChatRequest> for ChatTurnRequest {
    fn from(request: ChatRequest) -> Self {
        ChatTurnRequest {
            message: request.message,
            session_id: request.session_id,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Outbound chat response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Polished answer text; empty for a session-initialization turn.
    pub answer: String,
    /// Session id to send back on the next turn.
    pub session_id: Option<String>,
    /// Opaque reference payload from the upstream.
    pub reference: Option<Value>,
    /// Raw upstream body, present only on the fallback response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl From<ChatTurnResponse> for ChatResponse {
    fn from(response: ChatTurnResponse) -> Self {
        Self {
            answer: response.answer,
            session_id: response.session_id,
            reference: response.reference,
            raw: response.raw,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            details: None,
        }
    }

    pub fn upstream(details: impl Into<String>) -> Self {
        Self {
            error: "Upstream RAG service error".to_string(),
            details: Some(details.into()),
        }
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self {
            error: "Internal server error".to_string(),
            details: Some(details.into()),
        }
    }
}
