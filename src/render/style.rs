//! Style token resolution.

/// Resolve a colour token to a CSS colour.
///
/// The five named tokens map to fixed hex values; anything else is returned
/// unchanged so authors can write arbitrary CSS colours.
///
/// # Examples
///
/// ```
/// use slayd::render::resolve_color;
///
/// assert_eq!(resolve_color("green"), "#4ade80");
/// assert_eq!(resolve_color("rebeccapurple"), "rebeccapurple");
/// ```
pub fn resolve_color(token: &str) -> &str {
    match token {
        "red" => "#f87171",
        "green" => "#4ade80",
        "blue" => "#60a5fa",
        "yellow" => "#fbbf24",
        "gray" => "#6b7280",
        other => other,
    }
}
