//! Cached regex patterns for inline formatting.
//!
//! Uses LazyLock to compile patterns once on first use.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Delimits code-block placeholder tokens. Never produced by the formatter
/// itself, so transformed text cannot grow a false match.
pub const PLACEHOLDER_MARK: char = '\u{1}';

/// Matches a fenced block: ```` ```lang\n body ``` ````, language optional
pub static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(\w+)?\n([\s\S]*?)```").unwrap());

/// Matches `inline code` with no backticks inside
pub static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Matches **bold** with no asterisks inside
pub static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Matches a code-block placeholder and captures its index
pub static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!("{PLACEHOLDER_MARK}CODEBLOCK(\\d+){PLACEHOLDER_MARK}");
    Regex::new(&pattern).unwrap()
});

/// Build the placeholder token for code block `index`.
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_MARK}CODEBLOCK{index}{PLACEHOLDER_MARK}")
}
