//! Canned opening-greeting detection.
//!
//! On a fresh session the upstream sometimes ignores the question and replies
//! with its configured opener ("Hi! I'm your assistant..."). The orchestrator
//! uses this classifier as the signal to retry the question once with the
//! now-known session id.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything longer than this is assumed to be a substantive answer.
const MAX_GREETING_CHARS: usize = 200;

// Generic, content-free openers. Anchored so a real answer that merely
// mentions assistants or greetings is not flagged.
static OPENING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "Please repeat your question" and friends.
        r"(?i)^(please\s+)?(could\s+you\s+)?(kindly\s+)?repeat\s+your\s+question",
        // "I'm your assistant ..." with or without a leading greeting.
        r"(?is)^((hi|hello|hey)\b[\s,!.]*)?(i'?m|i\s+am)\s+your\b.{0,60}\bassistant\b",
        // "Hi/Hello/Hey ... how can I help ..."
        r"(?is)^(hi|hello|hey)\b.{0,80}\bhow\s+(can|may)\s+i\s+(help|assist)\b",
        // A bare "how can I help you?" style line.
        r"(?is)^\W*how\s+(can|may)\s+i\s+(help|assist)(\s+you)?(\s+today)?\s*[?!.]*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid opener regex"))
    .collect()
});

/// Classifies whether an answer is a generic, content-free opening line.
pub fn is_opening_greeting(answer: &str) -> bool {
    let trimmed = answer.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_GREETING_CHARS {
        return false;
    }
    OPENING_PATTERNS.iter().any(|pattern| pattern.is_match(trimmed))
}
