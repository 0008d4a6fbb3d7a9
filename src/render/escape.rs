//! HTML escaping.

/// Escape the five HTML metacharacters to their character references.
///
/// Only code bodies go through this; titles, captions and other text are
/// written as trusted markup.
///
/// # Examples
///
/// ```
/// use slayd::render::escape_html;
///
/// assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// assert_eq!(escape_html(""), "");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}
