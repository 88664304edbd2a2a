//! High-level API for rendering plan text to PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use planpdf::api::ReportBuilder;
//!
//! let report = ReportBuilder::new().render("## Wochenplan\n| Tag | Übung |\n|---|---|\n| Mo | Laufen |")?;
//! report.save(report.filename())?;
//! # Ok::<(), planpdf::Error>(())
//! ```
//!
//! ## HTTP boundary
//!
//! [`RenderRequest`] and [`ErrorResponse`] describe the JSON bodies an HTTP
//! front end exchanges with clients.

mod report_builder;
mod request;

pub use report_builder::{Report, ReportBuilder, CONTENT_TYPE};
pub use request::{ErrorResponse, RenderRequest};
