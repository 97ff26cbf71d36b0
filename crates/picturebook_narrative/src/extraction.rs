//! Utilities for extracting structured data from assistant replies.
//!
//! Replies mix prose, markdown and fenced code. Structured results are
//! expected inside a fenced block tagged `json`; anything else is a
//! contract violation by the model and fails loudly.

use picturebook_core::{Outline, Storyboard};
use picturebook_error::{ExtractionError, ExtractionErrorKind, PicturebookResult};
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;

/// First fenced block whose language tag is exactly `json`, alone on the fence line.
static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json[ \t]*\r?\n(.*?)```").expect("Valid JSON fence regex")
});

/// Extract the JSON value held in the first ```` ```json ```` fenced block.
///
/// Surrounding prose and fenced blocks with other tags are ignored. The
/// tag match is case-sensitive and nothing but whitespace may follow it on
/// the fence line, so `jsonc` or `json-ld` blocks are skipped.
///
/// # Errors
///
/// - `NoJsonBlockFound` if no block is tagged `json`
/// - `MalformedJson` if the block's content does not parse
///
/// # Examples
///
/// ```
/// use picturebook_narrative::extract_json;
///
/// let reply = "Here are the pages:\n\
///     \n\
///     ```json\n\
///     [{\"page_number\": 1}]\n\
///     ```\n\
///     Enjoy!";
///
/// let value = extract_json(reply).unwrap();
/// assert_eq!(value[0]["page_number"], 1);
/// ```
pub fn extract_json(text: &str) -> PicturebookResult<JsonValue> {
    let block = JSON_FENCE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str().trim())
        .ok_or_else(|| {
            tracing::error!(reply_length = text.len(), "No JSON block found in reply");
            ExtractionError::new(ExtractionErrorKind::NoJsonBlockFound)
        })?;

    parse_block(block)
}

/// Like [`extract_json`], but when no fenced block exists, fall back to the
/// first balanced `{...}` or `[...]` span in the reply.
///
/// A fenced block that fails to parse is still an error; the fallback only
/// covers replies where the model forgot the fence.
///
/// # Errors
///
/// Same as [`extract_json`].
///
/// # Examples
///
/// ```
/// use picturebook_narrative::extract_json_lenient;
///
/// let value = extract_json_lenient(r#"Sure! {"plot": ["apple falls"]}"#).unwrap();
/// assert_eq!(value["plot"][0], "apple falls");
/// ```
pub fn extract_json_lenient(text: &str) -> PicturebookResult<JsonValue> {
    match extract_json(text) {
        Err(e) if is_missing_block(&e) => {
            let span = first_balanced_span(text).ok_or_else(|| {
                ExtractionError::new(ExtractionErrorKind::NoJsonBlockFound)
            })?;
            tracing::debug!(span_length = span.len(), "Using unfenced JSON span");
            parse_block(span)
        }
        other => other,
    }
}

/// Convert an extracted value into a typed result.
///
/// # Errors
///
/// Returns `MalformedJson` if the value does not have the shape of `T`.
pub fn parse_json<T>(value: JsonValue) -> PicturebookResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| {
        tracing::error!(error = %e, "Extracted JSON has an unexpected shape");
        ExtractionError::new(ExtractionErrorKind::MalformedJson(e.to_string())).into()
    })
}

/// Extract a storyboard from the pagination stage's reply.
///
/// # Errors
///
/// Returns an extraction error if the reply holds no usable storyboard.
pub fn extract_storyboard(text: &str, lenient: bool) -> PicturebookResult<Storyboard> {
    parse_json(extract_value(text, lenient)?)
}

/// Extract an outline from the outline stage's reply (JSON mode).
///
/// # Errors
///
/// Returns an extraction error if the reply holds no usable outline.
pub fn extract_outline(text: &str, lenient: bool) -> PicturebookResult<Outline> {
    parse_json(extract_value(text, lenient)?)
}

fn extract_value(text: &str, lenient: bool) -> PicturebookResult<JsonValue> {
    if lenient {
        extract_json_lenient(text)
    } else {
        extract_json(text)
    }
}

fn parse_block(block: &str) -> PicturebookResult<JsonValue> {
    serde_json::from_str(block).map_err(|e| {
        let preview = block.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        ExtractionError::new(ExtractionErrorKind::MalformedJson(format!(
            "{} (JSON: {}...)",
            e, preview
        )))
        .into()
    })
}

fn is_missing_block(error: &picturebook_error::PicturebookError) -> bool {
    matches!(
        error.kind(),
        picturebook_error::PicturebookErrorKind::Extraction(inner)
            if inner.kind == ExtractionErrorKind::NoJsonBlockFound
    )
}

/// The earliest balanced object or array span.
fn first_balanced_span(text: &str) -> Option<&str> {
    let open = text.find(['{', '['])?;
    let close = if text[open..].starts_with('{') { '}' } else { ']' };
    let opener = if close == '}' { '{' } else { '[' };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text[open..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == opener && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open..open + i + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
