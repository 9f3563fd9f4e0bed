//! Fact text extraction.
//!
//! Fact services disagree on where the text lives: `fact`, `text`, or the
//! body itself.

use serde_json::Value;

/// Pull display text out of a fact body.
///
/// Tries `fact`, then `text`, then the bare value. Returns `None` for bodies
/// with nothing displayable (null, empty strings).
pub fn extract_fact(raw: &Value) -> Option<String> {
    for field in ["fact", "text"] {
        if let Some(text) = raw.get(field).and_then(non_empty_text) {
            return Some(text);
        }
    }
    match raw {
        Value::Object(_) | Value::Null => None,
        other => non_empty_text(other),
    }
}

fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::String(_) | Value::Null => None,
        Value::Object(_) => None,
        other => Some(other.to_string()),
    }
}
