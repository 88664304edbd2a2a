//! PDF writing module for generating plan PDFs.
//!
//! ## Architecture
//!
//! ```text
//! Document (pages of ContentElement)
//!     ↓
//! [PageTemplate] + [TableRenderer] (chrome and tables as primitives)
//!     ↓
//! [ContentStreamBuilder] (elements → content stream bytes)
//!     ↓
//! [PdfWriter] (assembles complete PDF structure)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! Text is drawn with the two base-14 fonts Helvetica (`/F1`) and
//! Helvetica-Bold (`/F2`) in WinAnsi encoding; nothing is embedded.

pub mod content_stream;
pub mod font_manager;
pub mod object_serializer;
pub mod page_template;
pub mod pdf_writer;
pub mod table_renderer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use font_manager::{
    encode_win_ansi, win_ansi_code, FontInfo, FontManager, FontMetrics, FontPair,
    SimpleFontMetrics,
};
pub use object_serializer::ObjectSerializer;
pub use page_template::{HFStyle, HeaderFooter, PageTemplate};
pub use pdf_writer::{PdfWriter, PdfWriterConfig};
pub use table_renderer::TableRenderer;
