//! Conversation orchestration: the top-level control flow for one chat turn.
//!
//! Per turn, in order: validate the message, classify the turn as a
//! session-initialization handshake or a normal question, augment the
//! question with live context (best-effort), call the upstream, suppress a
//! canned opening greeting with at most one follow-up call, and polish the
//! final answer. Nothing here is persisted; the session id lives upstream and
//! is round-tripped through the client.

use std::sync::Arc;

use crate::domain::answer::{friendly_answer, is_opening_greeting};
use crate::domain::extract::{extract, UpstreamBody};
use crate::domain::turn::{
    ChatTurnRequest, ChatTurnResponse, ExtractedResult, UpstreamPayload,
};
use crate::ports::{CompletionClient, ContextFetch, ContextSource};

/// Returned with HTTP 200 when no answer could be extracted from a
/// successful upstream response.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't generate a response. Please try again.";

/// The message a fresh-session client sends to warm up a session without
/// expecting a real answer.
const INIT_MESSAGE: &str = "hello";

/// Failures that abort a chat turn.
///
/// Everything else in the pipeline (malformed bodies, missing answers,
/// context failures, a failed follow-up) is recovered locally and never
/// becomes an error.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    /// The inbound message was missing or empty. No upstream call is made.
    #[error("missing or empty 'message'")]
    InvalidMessage,

    /// The primary upstream call failed (non-2xx or transport error).
    #[error("upstream call failed")]
    Upstream {
        /// Raw upstream body or transport error text, for the 502 response.
        details: String,
    },
}

/// Top-level chat-turn handler.
pub struct ConversationOrchestrator {
    completion: Arc<dyn CompletionClient>,
    context: Arc<dyn ContextSource>,
}

impl ConversationOrchestrator {
    /// Creates a new orchestrator over the given ports.
    pub fn new(completion: Arc<dyn CompletionClient>, context: Arc<dyn ContextSource>) -> Self {
        Self {
            completion,
            context,
        }
    }

    /// Runs one full chat turn.
    pub async fn handle_turn(
        &self,
        request: ChatTurnRequest,
    ) -> Result<ChatTurnResponse, TurnError> {
        let message = request
            .message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .ok_or(TurnError::InvalidMessage)?;

        // Client protocol convention: a bare "hello" with no session id warms
        // up a session; the caller only wants the session id back.
        let is_init =
            message.trim().eq_ignore_ascii_case(INIT_MESSAGE) && request.session_id.is_none();

        let question = match self.context.build_live_context().await.into_block() {
            Some(block) => {
                tracing::debug!(source = %block.source_url, "augmenting question with live context");
                format!("{}\n\nLive context:\n{}", message, block.render())
            }
            None => message.to_string(),
        };

        let payload = UpstreamPayload::new(question, request.session_id.clone());
        let raw = self
            .completion
            .complete(&payload)
            .await
            .map_err(|error| TurnError::Upstream {
                details: error.details(),
            })?;

        let body = UpstreamBody::from_raw(&raw);
        let primary = extract(&body);

        if is_init {
            return Ok(ChatTurnResponse {
                answer: String::new(),
                session_id: primary.session_id,
                reference: primary.reference,
                raw: None,
            });
        }

        let result = self.follow_up_if_greeting(&payload, primary).await;

        if result.answer.is_empty() {
            tracing::warn!(body = %raw, "no answer extracted from upstream response");
            return Ok(ChatTurnResponse {
                answer: FALLBACK_ANSWER.to_string(),
                session_id: None,
                reference: None,
                raw: Some(body.to_value()),
            });
        }

        Ok(ChatTurnResponse {
            answer: friendly_answer(&result.answer),
            session_id: result.session_id,
            reference: result.reference,
            raw: None,
        })
    }

    /// The optional second half of the two-attempt sequence.
    ///
    /// When the primary answer is a canned opening greeting and the upstream
    /// issued a session id, the same question is sent once more within that
    /// session. Best-effort: a failed or empty follow-up keeps the primary
    /// result. Structurally limited to a single extra call.
    async fn follow_up_if_greeting(
        &self,
        payload: &UpstreamPayload,
        primary: ExtractedResult,
    ) -> ExtractedResult {
        if !is_opening_greeting(&primary.answer) {
            return primary;
        }
        let Some(session_id) = primary.session_id.clone() else {
            return primary;
        };

        tracing::debug!(%session_id, "canned greeting detected, issuing follow-up call");
        let follow_up = payload.continuing(session_id);
        match self.completion.complete(&follow_up).await {
            Ok(raw) => {
                let result = extract(&UpstreamBody::from_raw(&raw));
                if result.answer.is_empty() {
                    primary
                } else {
                    result
                }
            }
            Err(error) => {
                tracing::warn!(%error, "follow-up call failed, keeping primary answer");
                primary
            }
        }
    }
}
