//! Upstream response extraction.
//!
//! The upstream returns one of three structurally different bodies for the
//! same logical result: a structured JSON object, a JSON object whose `data`
//! field is an SSE-formatted string, or raw SSE text. [`UpstreamBody`] makes
//! the shape explicit, and [`extract`] resolves them in a fixed precedence
//! order into one canonical [`ExtractedResult`].

pub mod sse;

use serde_json::Value;

use crate::domain::answer::sanitize;
use crate::domain::turn::ExtractedResult;

/// An upstream response body, discriminated at the parse boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    /// The body parsed as a top-level JSON object.
    Json(Value),
    /// The body is not JSON (or is a JSON string): raw SSE text.
    Text(String),
}

impl UpstreamBody {
    /// Classifies a raw response body.
    ///
    /// A body that fails to parse as JSON, or parses to a bare JSON string,
    /// is treated as raw SSE text rather than an error.
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::String(text)) => Self::Text(text),
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// The body as a JSON value, for diagnostics.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Text(text) => Value::String(text.clone()),
        }
    }
}

/// Produces one canonical result from an upstream body of unknown shape.
///
/// Precedence:
/// 1. JSON object whose `data` field is a string: treat it as SSE text.
/// 2. Raw text: SSE text.
/// 3. Any other JSON object: probe well-known answer/session/reference
///    fields, first non-empty value wins.
///
/// An empty answer is a valid "no answer available" result, never an error.
pub fn extract(body: &UpstreamBody) -> ExtractedResult {
    match body {
        UpstreamBody::Json(value) => {
            if let Some(wrapped) = value.get("data").and_then(Value::as_str) {
                if let Some(result) = sse::parse(wrapped) {
                    return result;
                }
            }
            extract_fields(value)
        }
        UpstreamBody::Text(text) => sse::parse(text).unwrap_or_default(),
    }
}

// Field fallback chains for direct-JSON upstream responses.
const ANSWER_PATHS: [&str; 5] = [
    "/data/answer",
    "/answer",
    "/data/content",
    "/content",
    "/message",
];
const SESSION_PATHS: [&str; 2] = ["/data/session_id", "/session_id"];
const REFERENCE_PATHS: [&str; 2] = ["/data/reference", "/reference"];

fn extract_fields(value: &Value) -> ExtractedResult {
    let answer = ANSWER_PATHS
        .iter()
        .filter_map(|path| value.pointer(path).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(sanitize)
        .unwrap_or_default();

    let session_id = SESSION_PATHS
        .iter()
        .filter_map(|path| value.pointer(path).and_then(Value::as_str))
        .find(|id| !id.is_empty())
        .map(str::to_string);

    let reference = REFERENCE_PATHS
        .iter()
        .filter_map(|path| value.pointer(path))
        .find(|v| !v.is_null())
        .cloned();

    ExtractedResult {
        answer,
        session_id,
        reference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sse_text() -> String {
        concat!(
            "data: {\"data\":{\"answer\":\"Energy for all.\",\"session_id\":\"s1\",",
            "\"reference\":{\"chunks\":[]}}}\n",
            "data: [DONE]\n",
        )
        .to_string()
    }

    #[test]
    fn three_shapes_yield_identical_results() {
        let direct = UpstreamBody::Json(json!({
            "data": {"answer": "Energy for all.", "session_id": "s1", "reference": {"chunks": []}}
        }));
        let wrapped = UpstreamBody::Json(json!({"data": sse_text()}));
        let raw = UpstreamBody::Text(sse_text());

        let expected = ExtractedResult {
            answer: "Energy for all.".to_string(),
            session_id: Some("s1".to_string()),
            reference: Some(json!({"chunks": []})),
        };
        assert_eq!(extract(&direct), expected);
        assert_eq!(extract(&wrapped), expected);
        assert_eq!(extract(&raw), expected);
    }

    #[test]
    fn from_raw_classifies_json_object() {
        let body = UpstreamBody::from_raw("{\"answer\":\"yes\"}");
        assert!(matches!(body, UpstreamBody::Json(_)));
    }

    #[test]
    fn from_raw_classifies_non_json_as_text() {
        let body = UpstreamBody::from_raw("data: {\"data\":{\"answer\":\"x\"}}\n");
        assert!(matches!(body, UpstreamBody::Text(_)));
    }

    #[test]
    fn from_raw_unwraps_json_encoded_string() {
        // A JSON-encoded string is not an object; its content is SSE text.
        let raw = serde_json::to_string(&sse_text()).unwrap();
        let body = UpstreamBody::from_raw(&raw);
        assert_eq!(extract(&body).answer, "Energy for all.");
    }

    #[test]
    fn answer_field_precedence() {
        let body = UpstreamBody::Json(json!({
            "message": "third",
            "content": "second",
            "answer": "first",
        }));
        assert_eq!(extract(&body).answer, "first");

        let body = UpstreamBody::Json(json!({"message": "only"}));
        assert_eq!(extract(&body).answer, "only");
    }

    #[test]
    fn empty_answer_falls_through_to_next_field() {
        let body = UpstreamBody::Json(json!({"answer": "", "content": "fallback"}));
        assert_eq!(extract(&body).answer, "fallback");
    }

    #[test]
    fn nested_fields_beat_top_level() {
        let body = UpstreamBody::Json(json!({
            "data": {"answer": "nested", "session_id": "inner"},
            "answer": "outer",
            "session_id": "outer-session",
        }));
        let result = extract(&body);
        assert_eq!(result.answer, "nested");
        assert_eq!(result.session_id.as_deref(), Some("inner"));
    }

    #[test]
    fn wrapped_sse_answer_that_sanitizes_to_empty_falls_through() {
        // The SSE stream only carried citation artifacts; field probing
        // still gets its turn.
        let body = UpstreamBody::Json(json!({
            "data": "data: {\"data\":{\"answer\":\"##1$$\"}}\n",
            "message": "real answer",
        }));
        assert_eq!(extract(&body).answer, "real answer");
    }

    #[test]
    fn wrapped_sse_without_answer_falls_back_to_fields() {
        // data is a string but yields no SSE answer; field probing still runs.
        let body = UpstreamBody::Json(json!({
            "data": "data: [DONE]\n",
            "message": "recovered",
        }));
        assert_eq!(extract(&body).answer, "recovered");
    }

    #[test]
    fn useless_body_yields_empty_result() {
        let body = UpstreamBody::Json(json!({"code": 102, "data": null}));
        assert_eq!(extract(&body), ExtractedResult::empty());

        let body = UpstreamBody::Text("no events here".to_string());
        assert_eq!(extract(&body), ExtractedResult::empty());
    }

    #[test]
    fn direct_answer_is_sanitized() {
        let body = UpstreamBody::Json(json!({"answer": "text ##9$$ with   markers"}));
        assert_eq!(extract(&body).answer, "text with markers");
    }

    #[test]
    fn to_value_round_trips_both_shapes() {
        let json_body = UpstreamBody::Json(json!({"a": 1}));
        assert_eq!(json_body.to_value(), json!({"a": 1}));

        let text_body = UpstreamBody::Text("raw".to_string());
        assert_eq!(text_body.to_value(), Value::String("raw".to_string()));
    }
}
