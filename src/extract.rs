//! Turns a raw completion payload into a normalized ingredient list.
//!
//! Vision models are asked to return a JSON array of ingredient names, but
//! the reply often arrives wrapped in prose, fenced code blocks, or as a list
//! of content parts. Parsing is two-tier: extract and parse the first
//! bracket-delimited JSON array, and when that fails tokenize the text on
//! commas and newlines. Neither tier ever errors.

use serde_json::Value;

/// Flatten a completion `message.content` value to a single string.
///
/// Vision responses may carry content as a list of parts; each part
/// contributes its `text` field, or its JSON representation when no text
/// field exists. Plain strings pass through, null becomes empty.
pub fn flatten_content(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts
            .iter()
            .map(|part| match part.get("text").and_then(Value::as_str) {
                Some(text) => text.to_string(),
                None => part.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse ingredient names out of raw model output.
///
/// Primary strategy: take the substring from the first `[` to the last `]`
/// and parse it as a JSON array, coercing every element to its string form.
/// Fallback: split on commas and newlines, trimming list markers. Entries
/// are trimmed and lowercased; empty entries never survive.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    let ingredients = match parse_json_array(raw) {
        Some(items) => items,
        None => split_plain_text(raw),
    };

    // Both strategies already drop empties, but the no-empty-entries
    // guarantee must hold no matter which path produced the list.
    ingredients
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect()
}

/// Flatten then parse in one step.
pub fn extract_ingredients(content: &Value) -> Vec<String> {
    parse_ingredients(&flatten_content(content))
}

fn parse_json_array(raw: &str) -> Option<Vec<String>> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }

    let parsed: Value = serde_json::from_str(&raw[start..=end]).ok()?;
    let items = parsed.as_array()?;

    Some(
        items
            .iter()
            .map(|item| match item.as_str() {
                Some(text) => text.trim().to_lowercase(),
                None => item.to_string().trim().to_lowercase(),
            })
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

fn split_plain_text(raw: &str) -> Vec<String> {
    raw.replace('\n', ",")
        .split(',')
        .map(|piece| {
            piece
                .trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '•')
                .to_lowercase()
        })
        .filter(|piece| !piece.is_empty())
        .collect()
}
