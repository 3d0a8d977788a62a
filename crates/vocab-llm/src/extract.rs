//! Best-effort recovery of a JSON array from model output.
//!
//! Models wrap their answers in prose or markdown fences. Extraction tries,
//! in order:
//!
//! 1. the span from the first `[` to the last `]`, with any fence markers
//!    inside it removed;
//! 2. the interior of a ```` ```json ```` block, then of a bare ```` ``` ````
//!    block;
//! 3. the whole trimmed text.
//!
//! The first attempt that parses as a JSON array wins. Nothing here returns
//! an error: "no array found" is `None`.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

fn bracket_span() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("bracket pattern is valid"))
}

/// Locate and parse a JSON array inside `content`.
pub fn extract_json_array(content: &str) -> Option<Vec<Value>> {
    let content = content.trim();
    bracketed(content)
        .or_else(|| fenced_block(content).and_then(parse_array))
        .or_else(|| parse_array(content))
}

/// Extract a JSON array and deserialize each element into `T`.
///
/// Elements that do not match `T` are skipped with a warning; the rest are
/// kept in order. Returns `None` only when no array could be found at all.
pub fn extract_records<T: DeserializeOwned>(content: &str) -> Option<Vec<T>> {
    let items = extract_json_array(content)?;
    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(index, %error, "extract: skipping malformed array element");
                None
            }
        })
        .collect();
    if records.len() < total {
        tracing::debug!(kept = records.len(), total, "extract: partial array");
    }
    Some(records)
}

fn bracketed(content: &str) -> Option<Vec<Value>> {
    let span = bracket_span().find(content)?.as_str();
    let cleaned = span.replace(JSON_FENCE, "").replace(FENCE, "");
    parse_array(&cleaned)
}

fn fenced_block(content: &str) -> Option<&str> {
    let (start, marker) = content
        .find(JSON_FENCE)
        .map(|i| (i, JSON_FENCE))
        .or_else(|| content.find(FENCE).map(|i| (i, FENCE)))?;
    let body = &content[start + marker.len()..];
    let end = body.find(FENCE).unwrap_or(body.len());
    Some(&body[..end])
}

fn parse_array(text: &str) -> Option<Vec<Value>> {
    match serde_json::from_str(text.trim()) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}
