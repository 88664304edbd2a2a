//! Character-set normalization.
//!
//! The standard fonts are written with WinAnsiEncoding, so everything that is
//! measured or drawn must stay inside printable Latin-1. Typographic characters
//! that a text generator likes to emit are transliterated, everything else
//! outside the range is dropped.

/// Check whether a character survives sanitization unchanged.
///
/// The supported subset is newline, tab, printable ASCII, and the printable
/// Latin-1 supplement (U+00A0..=U+00FF).
pub fn is_supported(ch: char) -> bool {
    matches!(ch, '\n' | '\t' | '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}')
}

/// Normalize text to the supported character subset.
///
/// Substitutions:
/// - non-breaking space → space
/// - en/em dash → `-`
/// - bullet and middle dot → `"- "`
/// - multiplication sign → `x`
/// - curly and angle quotes → `"`
/// - curly apostrophes → `'`
/// - ellipsis → `...`
///
/// Checkmarks have no WinAnsi glyph and are removed together with every other
/// unsupported character, including carriage returns.
///
/// ```
/// use planpdf::sanitize::sanitize;
///
/// assert_eq!(sanitize("3\u{d7}10 \u{2014} locker\u{2026}"), "3x10 - locker...");
/// assert_eq!(sanitize("Kraft \u{1f4aa}"), "Kraft ");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{a0}' => out.push(' '),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2022}' | '\u{b7}' => out.push_str("- "),
            '\u{d7}' => out.push('x'),
            '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{ab}' | '\u{bb}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2026}' => out.push_str("..."),
            c if is_supported(c) => out.push(c),
            _ => {},
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_unchanged() {
        assert_eq!(sanitize("Kniebeuge 3x10"), "Kniebeuge 3x10");
    }

    #[test]
    fn test_umlauts_and_degree_kept() {
        assert_eq!(sanitize("\u{dc}bung 20\u{b0}C \u{df}"), "\u{dc}bung 20\u{b0}C \u{df}");
    }

    #[test]
    fn test_dashes() {
        assert_eq!(sanitize("a\u{2013}b\u{2014}c"), "a-b-c");
    }

    #[test]
    fn test_bullets() {
        assert_eq!(sanitize("\u{2022}Mo"), "- Mo");
        assert_eq!(sanitize("\u{b7}Di"), "- Di");
    }

    #[test]
    fn test_quotes_and_apostrophes() {
        assert_eq!(
            sanitize("\u{201e}gut\u{201c} \u{ab}x\u{bb} it\u{2019}s \u{2018}y"),
            "\"gut\" \"x\" it's 'y"
        );
    }

    #[test]
    fn test_ellipsis_and_nbsp() {
        assert_eq!(sanitize("a\u{a0}b\u{2026}"), "a b...");
    }

    #[test]
    fn test_checkmarks_removed() {
        assert_eq!(sanitize("ok \u{2713}\u{2714}"), "ok ");
    }

    #[test]
    fn test_emoji_removed() {
        assert_eq!(sanitize("Lauf\u{1f3c3}en"), "Laufen");
    }

    #[test]
    fn test_controls_removed() {
        assert_eq!(sanitize("a\r\nb\u{7}\u{7f}\u{85}c\td"), "a\nbc\td");
    }

    #[test]
    fn test_idempotent_on_mixed_input() {
        let once = sanitize("\u{2022} 4\u{d7}8 \u{2014} \u{201e}RPE\u{201c} 7\u{2026} \u{2713}");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported('a'));
        assert!(is_supported('\u{ff}'));
        assert!(is_supported('\n'));
        assert!(!is_supported('\r'));
        assert!(!is_supported('\u{9f}'));
        assert!(!is_supported('\u{100}'));
    }
}
