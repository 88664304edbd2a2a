//! Color and font weight used by the layout engine and the writer.

use serde::{Deserialize, Serialize};

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use planpdf::layout::Color;
    ///
    /// let grid = Color::new(0.65, 0.65, 0.65);
    /// assert_eq!(grid, Color::gray(0.65));
    /// ```
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a gray with all channels set to `level`.
    pub fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }

    /// Create a black color.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a white color.
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Check whether this is pure black (the PDF default fill color).
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Font weight. Reports only distinguish regular from bold text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Regular weight (Helvetica)
    #[default]
    Normal,
    /// Bold weight (Helvetica-Bold)
    Bold,
}

impl FontWeight {
    /// Check if this weight is bold.
    pub fn is_bold(&self) -> bool {
        matches!(self, FontWeight::Bold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray() {
        let c = Color::gray(0.92);
        assert_eq!(c.r, 0.92);
        assert_eq!(c.g, 0.92);
        assert_eq!(c.b, 0.92);
        assert!(!c.is_black());
    }

    #[test]
    fn test_default_color_is_black() {
        assert!(Color::default().is_black());
    }

    #[test]
    fn test_font_weight() {
        assert!(FontWeight::Bold.is_bold());
        assert!(!FontWeight::Normal.is_bold());
        assert_eq!(FontWeight::default(), FontWeight::Normal);
    }
}
