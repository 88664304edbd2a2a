//! Positioned text runs.

use crate::geometry::Point;
use crate::layout::{Color, FontWeight};

/// A single line of text drawn at a baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    /// The text string, already sanitized
    pub text: String,
    /// Baseline origin
    pub origin: Point,
    /// Font weight (regular or bold Helvetica)
    pub weight: FontWeight,
    /// Font size in points
    pub size: f32,
    /// Fill color
    pub color: Color,
}

impl TextContent {
    /// Create a black, regular-weight text run.
    ///
    /// # Examples
    ///
    /// ```
    /// use planpdf::elements::TextContent;
    /// use planpdf::layout::FontWeight;
    ///
    /// let text = TextContent::new("Wochenplan", 50.0, 762.0, 16.0).with_weight(FontWeight::Bold);
    /// assert!(text.is_bold());
    /// ```
    pub fn new(text: impl Into<String>, x: f32, y: f32, size: f32) -> Self {
        Self {
            text: text.into(),
            origin: Point::new(x, y),
            weight: FontWeight::Normal,
            size,
            color: Color::black(),
        }
    }

    /// Set font weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Check if this run is bold.
    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }
}
