//! Server-sent-events payload parsing.
//!
//! The upstream sometimes answers a non-streaming request with the complete
//! text of an SSE stream: `data: <json>` lines terminated by `data: [DONE]`.
//! The stream delivers cumulative snapshots, so the last answer seen is the
//! authoritative one.

use serde_json::Value;

use crate::domain::answer::sanitize;
use crate::domain::turn::ExtractedResult;

/// Sentinel payload marking the end of the event stream.
const DONE_SENTINEL: &str = "[DONE]";

/// Decodes an SSE-formatted text block into a single logical result.
///
/// Returns `None` when no answer was observed on any line, signalling
/// "not SSE / not useful" so the caller can fall through to another
/// interpretation of the body. Unparsable payloads are logged and skipped;
/// they never abort the scan.
pub fn parse(text: &str) -> Option<ExtractedResult> {
    let mut answer: Option<String> = None;
    let mut session_id: Option<String> = None;
    let mut reference: Option<Value> = None;

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let Some(payload) = line.strip_prefix("data:") else {
            continue;
        };
        let payload = payload.trim();
        if payload == DONE_SENTINEL {
            continue;
        }

        let parsed: Value = match serde_json::from_str(payload) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, line = payload, "skipping unparsable SSE payload");
                continue;
            }
        };

        // Last occurrence wins, independently per field. An answer that is
        // nothing but citation artifacts sanitizes to empty and counts as
        // no answer at all.
        if let Some(text) = parsed.pointer("/data/answer").and_then(Value::as_str) {
            let cleaned = sanitize(text);
            if !cleaned.is_empty() {
                answer = Some(cleaned);
            }
        }
        if let Some(id) = parsed.pointer("/data/session_id").and_then(Value::as_str) {
            if !id.is_empty() {
                session_id = Some(id.to_string());
            }
        }
        if let Some(value) = parsed.pointer("/data/reference") {
            if !value.is_null() {
                reference = Some(value.clone());
            }
        }
    }

    answer.map(|answer| ExtractedResult {
        answer,
        session_id,
        reference,
    })
}
