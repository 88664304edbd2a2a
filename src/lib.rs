// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::enum_variant_names)]

//! # planpdf
//!
//! Renders lightweight Markdown training plans into paginated A4 PDF reports.
//!
//! ## Core Features
//!
//! - **Input**: headings (`#` to `######`), paragraphs, blank lines and pipe tables
//! - **Tables**: bold shaded header row, grid lines, wrapped cells, columns scaled
//!   to the usable width
//! - **Pagination**: headings, text lines and tables are never split across pages
//! - **Chrome**: title header and creation-date footer on every page
//! - **Fonts**: the base-14 Helvetica pair in WinAnsi encoding, no embedding
//!
//! Input is first sanitized to the characters the fonts can show: typographic
//! dashes, quotes and bullets are transliterated and everything else outside
//! Latin-1 (emoji, check marks) is dropped.
//!
//! ## Architecture
//!
//! ```text
//! text → sanitize → parse_blocks → LayoutEngine → Document → PdfWriter → bytes
//! ```
//!
//! ## Quick Start
//!
//! ```
//! let pdf = planpdf::render("## Wochenplan\n\n| Tag | Übung |\n|---|---|\n| Mo | Laufen |")?;
//! assert!(pdf.starts_with(b"%PDF-1.7"));
//! # Ok::<(), planpdf::Error>(())
//! ```
//!
//! Use [`api::ReportBuilder`] for custom layout settings, a fixed date or
//! compressed output.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Input processing
pub mod blocks;
pub mod sanitize;

// Layout
pub mod document;
/// Content elements for PDF generation
pub mod elements;
pub mod geometry;
pub mod layout;

// PDF writing
pub mod object;
pub mod writer;

// High-level API
pub mod api;

// Re-exports
pub use api::{ErrorResponse, RenderRequest, Report, ReportBuilder};
pub use blocks::{parse_blocks, Block};
pub use config::LayoutConfig;
pub use document::{Document, Page};
pub use error::{Error, Result};
pub use sanitize::sanitize;

/// Render plan text to PDF bytes with the default layout.
///
/// Fails with [`Error::EmptyInput`] for empty or whitespace-only text.
pub fn render(text: &str) -> Result<Vec<u8>> {
    Ok(ReportBuilder::new().render(text)?.into_bytes())
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
