//! Font metrics and encoding for the standard Helvetica fonts.
//!
//! Reports use two of the PDF Base-14 fonts, Helvetica and Helvetica-Bold,
//! written with WinAnsiEncoding. Neither font is embedded; only their advance
//! widths are needed to lay out text. Widths are the Adobe AFM values in units
//! of 1/1000 em for every printable WinAnsi code that coincides with Latin-1.

use crate::error::{Error, Result};
use crate::layout::FontWeight;

/// Narrow measurement interface used by the layout engine.
///
/// Implementations must be pure: the same text at the same size always has the
/// same width. Layout code is generic over this trait so tests can substitute
/// simple metrics for the real font tables.
pub trait FontMetrics {
    /// Width of `text` in points when set at `font_size`.
    fn text_width(&self, text: &str, font_size: f32) -> Result<f32>;
}

/// Helvetica widths for U+0020..=U+007E.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // sp - /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0 - 9
    278, 278, 584, 584, 584, 556, 1015, // : - @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A - M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N - Z
    278, 278, 278, 469, 556, 333, // [ - `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a - m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n - z
    334, 260, 334, 584, // { - ~
];

/// Helvetica widths for U+00A0..=U+00FF.
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // A0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // B0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // C0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // D0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // E0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // F0
];

/// Helvetica-Bold widths for U+0020..=U+007E.
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // sp - /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0 - 9
    333, 333, 584, 584, 584, 611, 975, // : - @
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A - M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N - Z
    333, 278, 333, 584, 556, 333, // [ - `
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a - m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n - z
    389, 280, 389, 584, // { - ~
];

/// Helvetica-Bold widths for U+00A0..=U+00FF.
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // A0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // B0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // C0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // D0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // E0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // F0
];

/// Map a character to its single-byte WinAnsi code.
///
/// Only the printable ranges shared with Latin-1 are accepted; the 0x80-0x9F
/// block of WinAnsiEncoding is never produced by the sanitizer.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    match ch as u32 {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => Some(code as u8),
        _ => None,
    }
}

/// Encode a string as WinAnsi bytes.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| {
            win_ansi_code(ch).ok_or_else(|| Error::Encoding {
                ch,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Metrics for one of the standard fonts.
#[derive(Debug, Clone, Copy)]
pub struct FontInfo {
    /// PostScript name (e.g., "Helvetica-Bold")
    pub name: &'static str,
    /// Font weight
    pub weight: FontWeight,
    /// Ascender height (above baseline)
    pub ascender: f32,
    /// Descender depth (below baseline, negative)
    pub descender: f32,
    /// Cap height (height of capital letters)
    pub cap_height: f32,
    /// x-height (height of lowercase x)
    pub x_height: f32,
    ascii: &'static [u16; 95],
    latin1: &'static [u16; 96],
}

impl FontInfo {
    /// Helvetica.
    pub fn helvetica() -> Self {
        Self {
            name: "Helvetica",
            weight: FontWeight::Normal,
            ascender: 718.0,
            descender: -207.0,
            cap_height: 718.0,
            x_height: 523.0,
            ascii: &HELVETICA_ASCII,
            latin1: &HELVETICA_LATIN1,
        }
    }

    /// Helvetica-Bold.
    pub fn helvetica_bold() -> Self {
        Self {
            name: "Helvetica-Bold",
            weight: FontWeight::Bold,
            ascender: 718.0,
            descender: -207.0,
            cap_height: 718.0,
            x_height: 532.0,
            ascii: &HELVETICA_BOLD_ASCII,
            latin1: &HELVETICA_BOLD_LATIN1,
        }
    }

    /// Width of a single character in font units (1/1000 em), if the font has it.
    pub fn char_width(&self, ch: char) -> Option<u16> {
        match ch as u32 {
            code @ 0x20..=0x7E => Some(self.ascii[(code - 0x20) as usize]),
            code @ 0xA0..=0xFF => Some(self.latin1[(code - 0xA0) as usize]),
            _ => None,
        }
    }

    /// Line height for this font at the given size.
    pub fn line_height(&self, font_size: f32) -> f32 {
        (self.ascender - self.descender) * font_size / 1000.0
    }
}

impl FontMetrics for FontInfo {
    fn text_width(&self, text: &str, font_size: f32) -> Result<f32> {
        let mut units: u32 = 0;
        for ch in text.chars() {
            let width = self.char_width(ch).ok_or_else(|| Error::MissingGlyph {
                ch,
                text: text.to_string(),
            })?;
            units += u32::from(width);
        }
        Ok(units as f32 * font_size / 1000.0)
    }
}

/// Regular and bold metrics used together by the layout engine.
#[derive(Clone, Copy)]
pub struct FontPair<'a> {
    /// Metrics for regular text
    pub regular: &'a dyn FontMetrics,
    /// Metrics for bold text
    pub bold: &'a dyn FontMetrics,
}

impl<'a> FontPair<'a> {
    /// Create a pair from two metrics implementations.
    pub fn new(regular: &'a dyn FontMetrics, bold: &'a dyn FontMetrics) -> Self {
        Self { regular, bold }
    }

    /// Metrics for the given weight.
    pub fn get(&self, weight: FontWeight) -> &'a dyn FontMetrics {
        match weight {
            FontWeight::Normal => self.regular,
            FontWeight::Bold => self.bold,
        }
    }
}

impl std::fmt::Debug for FontPair<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontPair").finish_non_exhaustive()
    }
}

/// Font manager for report generation.
///
/// Owns the two standard fonts and assigns their page resource names.
#[derive(Debug, Clone)]
pub struct FontManager {
    regular: FontInfo,
    bold: FontInfo,
}

impl FontManager {
    /// Create a manager with Helvetica and Helvetica-Bold.
    pub fn new() -> Self {
        Self {
            regular: FontInfo::helvetica(),
            bold: FontInfo::helvetica_bold(),
        }
    }

    /// Font info for the given weight.
    pub fn font(&self, weight: FontWeight) -> &FontInfo {
        match weight {
            FontWeight::Normal => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Resource name used in page dictionaries and `Tf` operators.
    pub fn resource_name(&self, weight: FontWeight) -> &'static str {
        match weight {
            FontWeight::Normal => "F1",
            FontWeight::Bold => "F2",
        }
    }

    /// All fonts with their resource names, in resource order.
    pub fn fonts(&self) -> [(&'static str, &FontInfo); 2] {
        [
            (self.resource_name(FontWeight::Normal), &self.regular),
            (self.resource_name(FontWeight::Bold), &self.bold),
        ]
    }

    /// Metrics pair borrowed from this manager.
    pub fn metrics(&self) -> FontPair<'_> {
        FontPair::new(&self.regular, &self.bold)
    }
}

impl Default for FontManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-ratio metrics: every character is `char_width_ratio * font_size` wide.
///
/// Accepts any character, which makes it useful for exercising layout code
/// without the real font tables.
#[derive(Debug, Clone, Copy)]
pub struct SimpleFontMetrics {
    /// Average character width as a ratio of font size
    pub char_width_ratio: f32,
}

impl SimpleFontMetrics {
    /// Create metrics with the given width ratio.
    pub fn new(char_width_ratio: f32) -> Self {
        Self { char_width_ratio }
    }
}

impl Default for SimpleFontMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.5,
        }
    }
}

impl FontMetrics for SimpleFontMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> Result<f32> {
        Ok(text.chars().count() as f32 * font_size * self.char_width_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_manager_creation() {
        let manager = FontManager::new();
        assert_eq!(manager.font(FontWeight::Normal).name, "Helvetica");
        assert_eq!(manager.font(FontWeight::Bold).name, "Helvetica-Bold");
        assert_eq!(manager.resource_name(FontWeight::Normal), "F1");
        assert_eq!(manager.resource_name(FontWeight::Bold), "F2");
    }

    #[test]
    fn test_text_width_calculation() {
        let font = FontInfo::helvetica();
        // "Hello" = 722 + 556 + 222 + 222 + 556 = 2278 units
        let width = font.text_width("Hello", 10.0).unwrap();
        assert!((width - 22.78).abs() < 0.001);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = FontInfo::helvetica().text_width("Kniebeuge", 12.0).unwrap();
        let bold = FontInfo::helvetica_bold().text_width("Kniebeuge", 12.0).unwrap();
        assert!(bold > regular);
    }

    #[test]
    fn test_latin1_widths() {
        let font = FontInfo::helvetica();
        assert_eq!(font.char_width('\u{dc}'), Some(722));
        assert_eq!(font.char_width('\u{e4}'), Some(556));
        assert_eq!(font.char_width('\u{df}'), Some(611));
        assert_eq!(font.char_width('\u{b0}'), Some(400));
        assert_eq!(FontInfo::helvetica_bold().char_width('\u{fc}'), Some(611));
    }

    #[test]
    fn test_missing_glyph_is_error() {
        let font = FontInfo::helvetica();
        let err = font.text_width("ok \u{2713}", 12.0).unwrap_err();
        assert!(matches!(err, Error::MissingGlyph { ch: '\u{2713}', .. }));
        assert!(font.text_width("\t", 12.0).is_err());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(FontInfo::helvetica().text_width("", 12.0).unwrap(), 0.0);
    }

    #[test]
    fn test_line_height() {
        let font = FontInfo::helvetica();
        assert!((font.line_height(10.0) - 9.25).abs() < 0.001);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("\u{dc}bung").unwrap(), vec![0xDC, b'b', b'u', b'n', b'g']);
        assert!(matches!(
            encode_win_ansi("\u{20ac}"),
            Err(Error::Encoding { ch: '\u{20ac}', .. })
        ));
        assert!(encode_win_ansi("a\nb").is_err());
    }

    #[test]
    fn test_font_pair_selects_weight() {
        let manager = FontManager::new();
        let pair = manager.metrics();
        let regular = pair.get(FontWeight::Normal).text_width("W", 10.0).unwrap();
        let bold = pair.get(FontWeight::Bold).text_width("W", 10.0).unwrap();
        assert_eq!(regular, 9.44);
        assert_eq!(bold, 9.44);
        let a = pair.get(FontWeight::Normal).text_width("b", 10.0).unwrap();
        let b = pair.get(FontWeight::Bold).text_width("b", 10.0).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_simple_metrics() {
        let metrics = SimpleFontMetrics::default();
        assert_eq!(metrics.text_width("abcd", 10.0).unwrap(), 20.0);
        assert_eq!(metrics.text_width("\u{2713}", 10.0).unwrap(), 5.0);
    }
}
