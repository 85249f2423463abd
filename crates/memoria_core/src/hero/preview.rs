//! Plain-text projection of rich-text thoughts.

use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static BLOCK_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*(br|/p|/div|/li|/h[1-6])\s*/?\s*>").expect("valid block break regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derives a short plain-text preview from rich-text markup.
///
/// Rules:
/// - block ends and `<br>` become spaces, remaining tags are removed;
/// - common HTML entities are decoded;
/// - whitespace is collapsed and the first 100 chars are kept.
///
/// Returns `None` when nothing readable remains.
pub fn thought_preview(content: &str) -> Option<String> {
    let with_breaks = BLOCK_BREAK_RE.replace_all(content, " ");
    let without_tags = TAG_RE.replace_all(&with_breaks, "");
    let decoded = decode_entities(&without_tags);
    let normalized = WHITESPACE_RE.replace_all(&decoded, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
}

fn decode_entities(value: &str) -> String {
    // `&amp;` last so that `&amp;lt;` stays literal `&lt;`.
    value
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
