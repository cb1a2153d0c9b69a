//! Conversational answer formatting.
//!
//! RAG answers tend to run long for a chat widget. The formatter keeps the
//! first couple of sentences, caps the length without splitting a word, and
//! opens with a greeting when the answer doesn't already bring one.

use once_cell::sync::Lazy;
use regex::Regex;

use super::sanitizer::sanitize;

/// Hard cap on the displayed answer, before the appended ellipsis.
const MAX_ANSWER_CHARS: usize = 400;

/// How many sentence-like units to keep.
const MAX_SENTENCES: usize = 2;

// A run of non-terminator characters plus an optional trailing terminator.
static SENTENCE_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]?").expect("valid sentence regex"));

// The answer already opens with a greeting word.
static OPENS_WITH_GREETING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(hi|hello|hey)\b").expect("valid greeting regex"));

// Trailing whitespace run plus the word fragment it precedes.
static TRAILING_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\S*$").expect("valid fragment regex"));

/// Shortens and polishes a raw answer for display.
///
/// Returns the empty string unchanged when the input sanitizes to nothing.
pub fn friendly_answer(raw: &str) -> String {
    let cleaned = sanitize(raw);
    if cleaned.is_empty() {
        return String::new();
    }

    let sentences: Vec<&str> = SENTENCE_UNIT
        .find_iter(&cleaned)
        .map(|m| m.as_str())
        .collect();
    let mut short = if sentences.is_empty() {
        // Input made entirely of terminators; keep it as-is.
        cleaned.clone()
    } else {
        // Units keep their leading whitespace, so plain concatenation
        // preserves the original spacing.
        sentences[..sentences.len().min(MAX_SENTENCES)]
            .concat()
            .trim()
            .to_string()
    };

    if short.chars().count() > MAX_ANSWER_CHARS {
        let head: String = short.chars().take(MAX_ANSWER_CHARS - 3).collect();
        let whole = TRAILING_FRAGMENT.replace(&head, "");
        short = format!("{}...", whole.trim());
    }

    if OPENS_WITH_GREETING.is_match(&short) {
        short
    } else {
        format!("Hi there! {}", short)
    }
}
