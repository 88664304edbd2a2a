//! Page chrome: the title header and the creation-date footer.
//!
//! The template is resolved once per render call (the date is fixed at that
//! point) and stamped identically onto every page, the first included.

use crate::config::LayoutConfig;
use crate::document::Page;
use crate::elements::TextContent;
use crate::layout::{Color, FontWeight};
use crate::sanitize::sanitize;

/// Style for header/footer text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HFStyle {
    /// Font size
    pub size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Text color
    pub color: Color,
}

impl HFStyle {
    /// Regular black text at the given size.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            color: Color::black(),
        }
    }

    /// Make bold.
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Set color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A single line of chrome text at a fixed page position.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFooter {
    /// Resolved text
    pub text: String,
    /// Baseline x
    pub x: f32,
    /// Baseline y
    pub y: f32,
    /// Text style
    pub style: HFStyle,
}

impl HeaderFooter {
    /// Create a chrome line. The text is sanitized.
    pub fn new(text: &str, x: f32, y: f32, style: HFStyle) -> Self {
        Self {
            text: sanitize(text),
            x,
            y,
            style,
        }
    }

    fn to_text(&self) -> TextContent {
        TextContent::new(self.text.clone(), self.x, self.y, self.style.size)
            .with_weight(self.style.weight)
            .with_color(self.style.color)
    }
}

/// Header and footer drawn on every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTemplate {
    /// Title line at the top of the page
    pub header: HeaderFooter,
    /// Date stamp at the bottom of the page
    pub footer: HeaderFooter,
}

impl PageTemplate {
    /// Build the report chrome from the layout configuration.
    ///
    /// The title sits `title_offset` below the top edge; the date stamp sits at
    /// `date_y` above the bottom edge. Both are left-aligned at the left margin.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let header = HeaderFooter::new(
            &config.title,
            config.margin_left,
            config.page_height - config.title_offset,
            HFStyle::new(config.title_size).bold().color(config.text_color),
        );
        let footer = HeaderFooter::new(
            &config.date_stamp(),
            config.margin_left,
            config.date_y,
            HFStyle::new(config.date_size).color(config.date_color),
        );
        Self { header, footer }
    }

    /// Draw the chrome onto a page.
    pub fn apply(&self, page: &mut Page) {
        page.push(self.header.to_text());
        page.push(self.footer.to_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn template() -> PageTemplate {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        PageTemplate::from_config(&LayoutConfig::new().with_date(date))
    }

    #[test]
    fn test_header_position_and_style() {
        let t = template();
        assert_eq!(t.header.text, "trainingsplan.at");
        assert_eq!(t.header.x, 50.0);
        assert_eq!(t.header.y, 802.0);
        assert_eq!(t.header.style.size, 20.0);
        assert_eq!(t.header.style.weight, FontWeight::Bold);
    }

    #[test]
    fn test_footer_date_stamp() {
        let t = template();
        assert_eq!(t.footer.text, "Erstellt am: 19.10.2026");
        assert_eq!(t.footer.y, 30.0);
        assert_eq!(t.footer.style.color, Color::gray(0.35));
        assert_eq!(t.footer.style.weight, FontWeight::Normal);
    }

    #[test]
    fn test_apply_adds_two_runs() {
        let mut page = Page::new();
        template().apply(&mut page);
        assert_eq!(page.elements().len(), 2);
        assert!(page.contains_text("trainingsplan.at"));
        assert!(page.contains_text("Erstellt am: 19.10.2026"));
    }

    #[test]
    fn test_chrome_text_sanitized() {
        let config = LayoutConfig::new().with_title("Plan \u{2014} \u{2713}");
        let t = PageTemplate::from_config(&config);
        assert_eq!(t.header.text, "Plan - ");
    }
}
