//! Page layout for plan documents.
//!
//! This module turns parsed blocks into positioned drawing primitives:
//! - Greedy word wrapping against font metrics ([`wrap`])
//! - Table column sizing and row heights ([`TableLayout`])
//! - The pagination controller ([`LayoutContext`])
//! - Block placement ([`LayoutEngine`])

pub mod context;
pub mod engine;
pub mod style;
pub mod table;
pub mod wrap;

// Re-export main types
pub use context::{LayoutContext, LegendState, PageState};
pub use engine::LayoutEngine;
pub use style::{Color, FontWeight};
pub use table::{CellPosition, TableLayout, TableStyle};
pub use wrap::wrap;
