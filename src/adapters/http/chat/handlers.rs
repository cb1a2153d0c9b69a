//! HTTP handlers for the chat endpoint.
//!
//! These handlers connect Axum routes to the conversation orchestrator.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{ConversationOrchestrator, TurnError};

use super::dto::{ChatRequest, ChatResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub orchestrator: Arc<ConversationOrchestrator>,
}

impl ChatAppState {
    /// Creates a new ChatAppState.
    pub fn new(orchestrator: Arc<ConversationOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/chat
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Run one chat turn against the upstream RAG service.
///
/// # Errors
/// - 400 Bad Request: missing/invalid `message` or unreadable body
/// - 502 Bad Gateway: upstream returned non-2xx or was unreachable
/// - 500 Internal Server Error: any other failure
pub async fn post_chat(
    State(state): State<ChatAppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(request) = body.map_err(|rejection| {
        ChatApiError::BadRequest(format!("Invalid request body: {}", rejection))
    })?;

    let response = state.orchestrator.handle_turn(request.into()).await?;
    Ok((StatusCode::OK, Json(ChatResponse::from(response))))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /healthz
// ════════════════════════════════════════════════════════════════════════════════

/// GET /healthz - Liveness probe.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Converts a panic caught by `CatchPanicLayer` into the standard 500 body.
pub fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let details = panic
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "request handler panicked".to_string());
    ChatApiError::Internal(details).into_response()
}

/// API error type that converts turn errors to HTTP responses.
#[derive(Debug)]
pub enum ChatApiError {
    BadRequest(String),
    Upstream(String),
    Internal(String),
}

impl From<TurnError> for ChatApiError {
    fn from(error: TurnError) -> Self {
        match error {
            TurnError::InvalidMessage => {
                ChatApiError::BadRequest("Missing 'message' (string).".to_string())
            }
            TurnError::Upstream { details } => ChatApiError::Upstream(details),
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ChatApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
            }
            ChatApiError::Upstream(details) => {
                tracing::error!(%details, "upstream failure");
                (StatusCode::BAD_GATEWAY, ErrorResponse::upstream(details))
            }
            ChatApiError::Internal(details) => {
                tracing::error!(%details, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(details))
            }
        };

        (status, Json(error)).into_response()
    }
}
