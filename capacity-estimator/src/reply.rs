//! Extract JSON from a chat-completion reply.
//!
//! Models often wrap JSON in a markdown fence (```` ```json ... ``` ````) or
//! add a sentence before it. [`strip_code_fences`] removes fenced-block
//! wrappers structurally: a fence only counts when it starts a line and its
//! opening line ends with a real newline, which cannot occur inside a JSON
//! string. Fence-like text inside JSON values is therefore left alone.

use ai_llm_service::error_handler::make_snippet;
use serde_json::Value;
use tracing::debug;

use crate::errors::ReplyError;

const FENCE: &str = "```";

/// Top-level keys the prompt asks for. Their absence is logged, never enforced.
pub const EXPECTED_TOP_LEVEL_KEYS: [&str; 2] = ["capacityEstimation", "recommendedItems"];

/// Removes markdown code-fence wrappers, repeatedly, until none remain.
///
/// Idempotent: `strip_code_fences(strip_code_fences(x)) == strip_code_fences(x)`.
pub fn strip_code_fences(text: &str) -> &str {
    let mut current = text.trim();
    while let Some(inner) = fenced_block(current) {
        current = inner;
    }
    current
}

/// Body of the first fenced block in `text`, trimmed.
///
/// The closing fence is the last line-start fence after the opening one; an
/// unterminated block runs to the end of the text.
fn fenced_block(text: &str) -> Option<&str> {
    let open = line_start_fences(text).next()?;
    let after_ticks = &text[open + FENCE.len()..];

    let line_end = after_ticks.find('\n')?;
    let tag = after_ticks[..line_end].trim();
    if tag.contains(char::is_whitespace) || tag.contains('`') {
        return None;
    }

    let body = &after_ticks[line_end + 1..];
    let body = match line_start_fences(body).last() {
        Some(close) => &body[..close],
        None => body,
    };
    Some(body.trim())
}

/// Byte offsets of every fence that begins a line.
fn line_start_fences(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.match_indices(FENCE)
        .map(|(idx, _)| idx)
        .filter(move |&idx| idx == 0 || text[..idx].ends_with('\n'))
}

/// Parses a model reply into JSON.
///
/// 1. Strip fences and parse.
/// 2. Otherwise retry on the span from the first `{` to the last `}`
///    (handles prose around an unfenced object).
///
/// # Errors
/// - [`ReplyError::Empty`] if nothing is left after stripping
/// - [`ReplyError::Unparsable`] if neither attempt yields JSON
pub fn parse_reply(text: &str) -> Result<Value, ReplyError> {
    let stripped = strip_code_fences(text);
    if stripped.is_empty() {
        return Err(ReplyError::Empty);
    }

    let primary = match serde_json::from_str::<Value>(stripped) {
        Ok(v) => return Ok(v),
        Err(e) => e,
    };

    if let Some(candidate) = outermost_object(stripped) {
        if let Ok(v) = serde_json::from_str::<Value>(candidate) {
            debug!(
                skipped_bytes = stripped.len() - candidate.len(),
                "parsed JSON object embedded in surrounding text"
            );
            return Ok(v);
        }
    }

    Err(ReplyError::Unparsable {
        reason: primary.to_string(),
        snippet: make_snippet(stripped),
    })
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Expected top-level keys missing from a parsed reply.
pub fn missing_top_level_keys(reply: &Value) -> Vec<&'static str> {
    EXPECTED_TOP_LEVEL_KEYS
        .into_iter()
        .filter(|key| reply.get(*key).is_none())
        .collect()
}
