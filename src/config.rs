//! Configuration for report layout and output.
//!
//! Every constant the layout engine uses lives in [`LayoutConfig`]. The defaults
//! describe the A4 training-plan report; a partial JSON file can override any of
//! them because the struct deserializes with `#[serde(default)]`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::layout::Color;

const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Layout and output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Page width in points.
    pub page_width: f32,
    /// Page height in points.
    pub page_height: f32,
    /// Left margin.
    pub margin_left: f32,
    /// Right margin.
    pub margin_right: f32,
    /// Top margin; the write cursor starts at `page_height - margin_top`.
    pub margin_top: f32,
    /// Bottom margin.
    pub margin_bottom: f32,
    /// Extra space kept free above the bottom margin before a page break.
    pub safety_buffer: f32,

    /// Body text size.
    pub body_size: f32,
    /// Line height for body text and headings.
    pub line_height: f32,
    /// Extra advance after level 1 and 2 headings.
    pub heading_spacing: f32,
    /// Space after each legend line.
    pub legend_spacing: f32,

    /// Table text size.
    pub table_size: f32,
    /// Horizontal cell padding, applied on both sides.
    pub padding_x: f32,
    /// Vertical cell padding, applied on both sides.
    pub padding_y: f32,
    /// Baseline step between wrapped lines inside a cell.
    pub table_line_spacing: f32,
    /// Minimum row height.
    pub min_row_height: f32,
    /// Extra height reserved below a table when checking whether it fits.
    pub table_reserve: f32,
    /// Gap between the cursor and a table's top edge.
    pub table_space_before: f32,
    /// Gap between a table's bottom edge and the next block.
    pub table_space_after: f32,
    /// Border and separator width.
    pub grid_line_width: f32,
    /// Placeholder for missing cells.
    pub placeholder: String,

    /// Body text color.
    pub text_color: Color,
    /// Table border color.
    pub grid_color: Color,
    /// Header row background.
    pub header_background: Color,

    /// Title drawn at the top of every page.
    pub title: String,
    /// Title size.
    pub title_size: f32,
    /// Distance from the top of the page to the title baseline.
    pub title_offset: f32,
    /// Label preceding the creation date.
    pub date_label: String,
    /// chrono format string for the creation date.
    pub date_format: String,
    /// Date stamp size.
    pub date_size: f32,
    /// Date stamp baseline.
    pub date_y: f32,
    /// Date stamp color.
    pub date_color: Color,
    /// Fixed creation date; `None` means today.
    pub date: Option<NaiveDate>,

    /// Lines of the legend printed once after the first table.
    pub legend: Vec<String>,

    /// Attachment filename.
    pub filename: String,
    /// Compress content streams with FlateDecode.
    pub compress: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin_left: 50.0,
            margin_right: 50.0,
            margin_top: 80.0,
            margin_bottom: 50.0,
            safety_buffer: 20.0,
            body_size: 12.0,
            line_height: 14.0,
            heading_spacing: 6.0,
            legend_spacing: 6.0,
            table_size: 10.0,
            padding_x: 6.0,
            padding_y: 5.0,
            table_line_spacing: 12.0,
            min_row_height: 20.0,
            table_reserve: 10.0,
            table_space_before: 6.0,
            table_space_after: 8.0,
            grid_line_width: 1.0,
            placeholder: "\u{2013}".to_string(),
            text_color: Color::black(),
            grid_color: Color::gray(0.65),
            header_background: Color::gray(0.92),
            title: "trainingsplan.at".to_string(),
            title_size: 20.0,
            title_offset: 40.0,
            date_label: "Erstellt am:".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            date_size: 10.0,
            date_y: 30.0,
            date_color: Color::gray(0.35),
            date: None,
            legend: default_legend(),
            filename: "trainingsplan.pdf".to_string(),
            compress: false,
        }
    }
}

fn default_legend() -> Vec<String> {
    vec![
        "Legende:".to_string(),
        "RPE (Rate of Perceived Exertion) 1-10: 5-6 = locker / Plaudertempo, 7-8 = fordernd, 9 = sehr hart.".to_string(),
        "Tempo-Beispiele: 3-1-3 = 3s exzentrisch - 1s Pause - 3s konzentrisch.".to_string(),
        "Pause: Satzpausen zwischen S\u{e4}tzen/Intervallen.".to_string(),
    ]
}

impl LayoutConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the page size.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set all four margins.
    pub fn with_margins(mut self, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Fix the creation date instead of using today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Replace the legend lines.
    pub fn with_legend(mut self, legend: Vec<String>) -> Self {
        self.legend = legend;
        self
    }

    /// Set the attachment filename.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Width between the left and right margins.
    pub fn usable_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Cursor position right after chrome has been drawn on a fresh page.
    pub fn content_top(&self) -> f32 {
        self.page_height - self.margin_top
    }

    /// Lowest position an atomic unit may reach without forcing a page break.
    pub fn content_floor(&self) -> f32 {
        self.margin_bottom + self.safety_buffer
    }

    /// Largest `ensure` request a fresh page can satisfy.
    pub fn page_capacity(&self) -> f32 {
        self.content_top() - self.content_floor()
    }

    /// Display size for a heading level.
    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            1 => 18.0,
            2 => 16.0,
            _ => 14.0,
        }
    }

    /// Cursor advance after one heading line.
    pub fn heading_advance(&self, level: u8) -> f32 {
        if level <= 2 {
            self.line_height + self.heading_spacing
        } else {
            self.line_height
        }
    }

    /// Creation date: the configured one or today in local time.
    pub fn creation_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Formatted date stamp, e.g. `Erstellt am: 19.10.2026`.
    ///
    /// An invalid `date_format` falls back to `DD.MM.YYYY`.
    pub fn date_stamp(&self) -> String {
        let date = self.creation_date();
        let mut formatted = String::new();
        if write!(formatted, "{}", date.format(&self.date_format)).is_err() {
            log::warn!("invalid date format '{}', using default", self.date_format);
            formatted = date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        format!("{} {}", self.date_label, formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = LayoutConfig::default();
        assert_eq!(config.usable_width(), 495.0);
        assert_eq!(config.content_top(), 762.0);
        assert_eq!(config.content_floor(), 70.0);
        assert_eq!(config.page_capacity(), 692.0);
    }

    #[test]
    fn test_heading_sizes() {
        let config = LayoutConfig::default();
        assert_eq!(config.heading_size(1), 18.0);
        assert_eq!(config.heading_size(2), 16.0);
        assert_eq!(config.heading_size(3), 14.0);
        assert_eq!(config.heading_size(6), 14.0);
        assert_eq!(config.heading_advance(2), 20.0);
        assert_eq!(config.heading_advance(3), 14.0);
    }

    #[test]
    fn test_date_stamp_uses_fixed_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let config = LayoutConfig::new().with_date(date);
        assert_eq!(config.date_stamp(), "Erstellt am: 07.03.2025");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let mut config = LayoutConfig::new().with_date(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        config.date_format = "%Q".to_string();
        assert_eq!(config.date_stamp(), "Erstellt am: 07.03.2025");
    }

    #[test]
    fn test_builder_methods() {
        let config = LayoutConfig::new()
            .with_title("plan")
            .with_filename("plan.pdf")
            .with_compression(true)
            .with_margins(40.0, 40.0, 60.0, 40.0);
        assert_eq!(config.title, "plan");
        assert_eq!(config.filename, "plan.pdf");
        assert!(config.compress);
        assert_eq!(config.usable_width(), 515.0);
    }

    #[test]
    fn test_partial_json_override() {
        let config =
            LayoutConfig::from_json(r#"{"title": "mein-plan", "date": "2024-12-31"}"#).unwrap();
        assert_eq!(config.title, "mein-plan");
        assert_eq!(config.date, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(config.page_width, 595.0);
        assert_eq!(config.legend.len(), 4);
    }

    #[test]
    fn test_invalid_json() {
        assert!(LayoutConfig::from_json("{ not json").is_err());
    }
}
