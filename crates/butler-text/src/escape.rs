//! HTML escaping for untrusted text.

use std::fmt::Display;

/// Escape HTML special characters.
///
/// The value is stringified first, so numbers and other `Display` types are
/// accepted. Each of `& < > " ' /` is replaced by its entity in a single pass;
/// emitted entities are never escaped again.
///
/// # Examples
///
/// ```
/// use butler_text::escape_html;
///
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html(5), "5");
/// ```
#[must_use]
pub fn escape_html(value: impl Display) -> String {
    let text = value.to_string();
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            '/' => result.push_str("&#x2F;"),
            _ => result.push(c),
        }
    }
    result
}
