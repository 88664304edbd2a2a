//! Greedy word wrapping under a width limit.

use crate::error::Result;
use crate::sanitize::sanitize;
use crate::writer::font_manager::FontMetrics;

/// Wrap text into lines that fit `max_width`.
///
/// Words are separated by any whitespace and joined with single spaces. A
/// candidate line fits when its measured width plus `2 * padding_x` is at most
/// `max_width`. A word that is too wide on its own is emitted unbroken on a line
/// of its own. Whitespace-only text produces no lines.
///
/// The text is sanitized first, so callers can pass raw strings.
///
/// ```
/// use planpdf::layout::wrap;
/// use planpdf::writer::SimpleFontMetrics;
///
/// // Every character is 5pt wide at size 10.
/// let metrics = SimpleFontMetrics::default();
/// let lines = wrap("aa bb cc", &metrics, 10.0, 30.0, 0.0).unwrap();
/// assert_eq!(lines, vec!["aa", "bb", "cc"]);
/// ```
pub fn wrap(
    text: &str,
    font: &dyn FontMetrics,
    font_size: f32,
    max_width: f32,
    padding_x: f32,
) -> Result<Vec<String>> {
    let text = sanitize(text);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        let width = font.text_width(&candidate, font_size)? + 2.0 * padding_x;

        if width > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}
