//! Domain layer containing the turn-processing logic.
//!
//! # Module Organization
//!
//! - `turn` - Data model for a single chat turn
//! - `answer` - Sanitization, friendly formatting, greeting detection
//! - `extract` - Upstream response-shape normalization (JSON / wrapped SSE / raw SSE)
//!
//! Everything here is pure: no I/O, no clocks, no ambient configuration.

pub mod answer;
pub mod extract;
pub mod turn;
