//! Inline text formatting.
//!
//! Text-bearing fields accept a small markdown-like syntax: fenced code
//! blocks, `inline code`, `**bold**` and newlines as line breaks. Everything
//! else, raw HTML included, passes through untouched.
//!
//! Formatting runs in three stages so that later substitutions can never
//! reach into code blocks:
//!
//! 1. [`extract_code_blocks`] renders each fenced block and swaps it for a
//!    numbered placeholder.
//! 2. [`transform_inline`] applies the inline rules to what is left.
//! 3. [`restore_code_blocks`] puts the rendered blocks back by index.
//!
//! Inline code content is *not* escaped, so `` `<b>` `` emits a real `<b>`
//! tag. Documents rely on this to embed markup in code spans.

use regex_lite::Captures;

use super::escape::escape_html;
use super::patterns::{BOLD_RE, CODE_FENCE_RE, INLINE_CODE_RE, PLACEHOLDER_RE, placeholder};

/// Language tag used for code blocks that do not name one.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// Format a text field into inline markup.
///
/// # Examples
///
/// ```
/// use slayd::render::format_text;
///
/// assert_eq!(format_text("**Hi**\n`x`"), "<strong>Hi</strong><br><code>x</code>");
/// assert_eq!(format_text(""), "");
/// ```
pub fn format_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let extracted = extract_code_blocks(text);
    let transformed = transform_inline(&extracted.text);
    restore_code_blocks(&transformed, &extracted.blocks)
}

/// Render an escaped code block tagged with its language.
pub fn code_block(language: &str, code: &str) -> String {
    format!(
        "<pre><code class=\"language-{language}\">{}</code></pre>",
        escape_html(code)
    )
}

/// Text with its fenced blocks replaced by placeholders.
#[derive(Debug)]
struct Extracted {
    text: String,
    /// Rendered blocks, indexed by placeholder number.
    blocks: Vec<String>,
}

fn extract_code_blocks(text: &str) -> Extracted {
    let mut blocks = Vec::new();
    let text = CODE_FENCE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let language = caps.get(1).map_or(DEFAULT_LANGUAGE, |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            blocks.push(code_block(language, body.trim()));
            placeholder(blocks.len() - 1)
        })
        .into_owned();

    Extracted { text, blocks }
}

fn transform_inline(text: &str) -> String {
    let text = INLINE_CODE_RE.replace_all(text, "<code>${1}</code>");
    let text = BOLD_RE.replace_all(&text, "<strong>${1}</strong>");
    text.replace('\n', "<br>")
}

fn restore_code_blocks(text: &str, blocks: &[String]) -> String {
    if blocks.is_empty() {
        return text.to_string();
    }

    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| blocks.get(index))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
