//! High-level report builder and rendered report type.
//!
//! Provides `Report` for the finished PDF and `ReportBuilder` for customized
//! rendering.

use crate::blocks::parse_blocks;
use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::layout::LayoutEngine;
use crate::sanitize::sanitize;
use crate::writer::{FontManager, PdfWriter, PdfWriterConfig};
use std::fs;
use std::path::Path;

/// MIME type of a rendered report.
pub const CONTENT_TYPE: &str = "application/pdf";

/// A rendered plan document.
///
/// # Example
///
/// ```
/// use planpdf::api::ReportBuilder;
///
/// let report = ReportBuilder::new().render("## Wochenplan\nMontag: Laufen")?;
/// assert!(report.as_bytes().starts_with(b"%PDF-1.7"));
/// assert_eq!(report.page_count(), 1);
/// # Ok::<(), planpdf::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    bytes: Vec<u8>,
    filename: String,
    page_count: usize,
}

impl Report {
    /// Get the PDF as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to PDF bytes, consuming the report.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Save the PDF to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), &self.bytes)?;
        log::debug!("saved report to {}", path.as_ref().display());
        Ok(())
    }

    /// Attachment filename suggested to clients.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// MIME type of the report.
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

/// Builder for rendering plan text with custom layout settings.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use planpdf::api::ReportBuilder;
/// use planpdf::LayoutConfig;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let report = ReportBuilder::new()
///     .with_config(LayoutConfig::new().with_date(date).with_compression(true))
///     .render("# Plan")?;
/// assert_eq!(report.filename(), "trainingsplan.pdf");
/// # Ok::<(), planpdf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    config: LayoutConfig,
}

impl ReportBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given layout configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Layout configuration in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Render plan text to a PDF report.
    ///
    /// Fails with [`Error::EmptyInput`] when `text` is empty or only whitespace.
    pub fn render(&self, text: &str) -> Result<Report> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        // Resolve the date once so chrome and metadata agree
        let config = self.config.clone().with_date(self.config.creation_date());

        let blocks = parse_blocks(&sanitize(text));
        let fonts = FontManager::new();
        let document = LayoutEngine::new(&config, fonts.metrics()).layout(&blocks)?;

        let mut writer = PdfWriter::with_config(PdfWriterConfig::from_config(&config));
        writer.add_document(&document, config.page_width, config.page_height)?;
        let page_count = writer.page_count();
        let bytes = writer.finish()?;

        log::info!(
            "rendered {} blocks into {} pages ({} bytes)",
            blocks.len(),
            page_count,
            bytes.len()
        );

        Ok(Report {
            bytes,
            filename: config.filename.clone(),
            page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn builder() -> ReportBuilder {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        ReportBuilder::new().with_config(LayoutConfig::new().with_date(date))
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(builder().render(""), Err(Error::EmptyInput)));
        assert!(matches!(builder().render(" \n\t\n"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_report_metadata() {
        let report = builder().render("Hallo").unwrap();
        assert_eq!(report.filename(), "trainingsplan.pdf");
        assert_eq!(report.content_type(), "application/pdf");
        assert_eq!(report.page_count(), 1);
        assert!(report.as_bytes().ends_with(b"%%EOF"));
    }

    #[test]
    fn test_custom_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let config = LayoutConfig::new().with_date(date).with_filename("plan.pdf");
        let report = ReportBuilder::new().with_config(config).render("x").unwrap();
        assert_eq!(report.filename(), "plan.pdf");
    }

    #[test]
    fn test_date_in_chrome_and_metadata() {
        let bytes = builder().render("Hallo").unwrap().into_bytes();
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains("(Erstellt am: 19.10.2026) Tj"));
        assert!(content.contains("/CreationDate (D:20261019)"));
    }

    #[test]
    fn test_sanitized_emoji_only_input_renders() {
        let report = builder().render("\u{1F4AA}").unwrap();
        assert_eq!(report.page_count(), 1);
    }
}
