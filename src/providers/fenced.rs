use serde::de::DeserializeOwned;

use crate::core::Suggestion;
use crate::error::{Result, SearchError};

const FENCE: &str = "```";

/// Strip a Markdown code fence around a model reply.
///
/// Handles a leading fence with or without a language tag (```` ```json ````)
/// and a trailing fence; unfenced text is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = skip_language_tag(rest).trim_start();
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest.trim_end();
    }

    text
}

/// Skip a language tag: a letter-led word followed by whitespace or the end
fn skip_language_tag(rest: &str) -> &str {
    if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return rest;
    }

    let tag_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    let after = &rest[tag_len..];

    if after.is_empty() || after.starts_with(char::is_whitespace) {
        after
    } else {
        rest
    }
}

/// Parse a possibly fenced JSON payload
pub fn parse_fenced_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let payload = strip_code_fence(raw);
    if payload.is_empty() {
        return Err(SearchError::MalformedResponse("empty reply".to_string()));
    }
    Ok(serde_json::from_str(payload)?)
}

/// Parse a suggestion array, skipping entries that do not fit the schema
pub fn parse_suggestions(raw: &str) -> Result<Vec<Suggestion>> {
    let entries: Vec<serde_json::Value> = parse_fenced_json(raw)?;

    let total = entries.len();
    let suggestions: Vec<Suggestion> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<Suggestion>(entry).ok())
        .filter_map(Suggestion::into_usable)
        .collect();

    if suggestions.len() < total {
        tracing::debug!("Skipped {} unusable suggestions", total - suggestions.len());
    }

    Ok(suggestions)
}

/// Parse a bare 0-100 relevance integer (fenced or not)
pub fn parse_relevance(raw: &str) -> Result<u8> {
    let payload = strip_code_fence(raw);
    let value: i64 = payload.parse().map_err(|_| {
        SearchError::MalformedResponse(format!("expected integer score, got {:?}", payload))
    })?;

    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| SearchError::MalformedResponse(format!("score {} out of range", value)))
}
