//! Application layer - Use-case orchestration.
//!
//! Coordinates the domain pipeline with the outbound ports. This is the only
//! layer that sequences upstream calls; adapters stay single-purpose and the
//! domain stays pure.

mod orchestrator;

pub use orchestrator::{ConversationOrchestrator, TurnError, FALLBACK_ANSWER};
