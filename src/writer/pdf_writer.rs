//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.

use super::content_stream::ContentStreamBuilder;
use super::font_manager::{encode_win_ansi, FontManager};
use super::object_serializer::ObjectSerializer;
use crate::config::LayoutConfig;
use crate::document::Document;
use crate::elements::ContentElement;
use crate::error::Result;
use crate::object::{Object, ObjectRef};
use crate::sanitize::sanitize;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Write;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Producing library
    pub producer: Option<String>,
    /// Creation date written to the Info dictionary
    pub creation_date: Option<NaiveDate>,
    /// Whether to compress content streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            creator: Some(crate::NAME.to_string()),
            producer: Some(format!("{} {}", crate::NAME, crate::VERSION)),
            creation_date: None,
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Writer settings for a report laid out with `config`.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::default()
            .with_title(config.title.clone())
            .with_creation_date(config.creation_date())
            .with_compress(config.compress)
    }

    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the creation date.
    pub fn with_creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Enable or disable stream compression.
    ///
    /// When enabled, content streams are compressed using FlateDecode
    /// (zlib/deflate) to reduce file size.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
///
/// Returns compressed bytes suitable for FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Format a date as a PDF date string (`D:YYYYMMDD`).
pub fn pdf_date(date: NaiveDate) -> String {
    date.format("D:%Y%m%d").to_string()
}

/// Info dictionary text: sanitized, then WinAnsi bytes.
fn info_string(text: &str) -> Result<Object> {
    Ok(ObjectSerializer::string(encode_win_ansi(&sanitize(text))?))
}

/// Internal page data.
struct PageData {
    width: f32,
    height: f32,
    content: Vec<u8>,
}

/// PDF document writer.
///
/// Builds a complete PDF document with pages, fonts, and content.
pub struct PdfWriter {
    config: PdfWriterConfig,
    fonts: FontManager,
    pages: Vec<PageData>,
    /// Object ID counter
    next_obj_id: u32,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            fonts: FontManager::new(),
            pages: Vec::new(),
            next_obj_id: 1,
        }
    }

    /// Allocate a new object ID.
    fn alloc_obj_id(&mut self) -> ObjectRef {
        let id = self.next_obj_id;
        self.next_obj_id += 1;
        ObjectRef::new(id, 0)
    }

    /// Add a page with the given dimensions and content.
    ///
    /// The content stream is built immediately, so encoding errors surface here.
    pub fn add_page(&mut self, width: f32, height: f32, elements: &[ContentElement]) -> Result<()> {
        let mut builder = ContentStreamBuilder::new();
        builder.add_elements(elements);
        let content = builder.build()?;
        self.pages.push(PageData {
            width,
            height,
            content,
        });
        Ok(())
    }

    /// Add every page of a laid-out document.
    pub fn add_document(&mut self, document: &Document, width: f32, height: f32) -> Result<()> {
        for page in document.pages() {
            self.add_page(width, height, page.elements())?;
        }
        Ok(())
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn font_objects(&self) -> Vec<(&'static str, Object)> {
        self.fonts
            .fonts()
            .iter()
            .map(|(resource, font)| {
                let font_obj = ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Font")),
                    ("Subtype", ObjectSerializer::name("Type1")),
                    ("BaseFont", ObjectSerializer::name(font.name)),
                    ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
                ]);
                (*resource, font_obj)
            })
            .collect()
    }

    fn info_object(&self) -> Result<Object> {
        let mut info_entries = Vec::new();
        if let Some(title) = &self.config.title {
            info_entries.push(("Title", info_string(title)?));
        }
        if let Some(creator) = &self.config.creator {
            info_entries.push(("Creator", info_string(creator)?));
        }
        if let Some(producer) = &self.config.producer {
            info_entries.push(("Producer", info_string(producer)?));
        }
        if let Some(date) = self.config.creation_date {
            info_entries.push(("CreationDate", ObjectSerializer::string(pdf_date(date))));
        }
        Ok(ObjectSerializer::dict(info_entries))
    }

    /// Build the complete PDF document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::compact();
        let mut objects: Vec<(ObjectRef, Object)> = Vec::new();

        let catalog_ref = self.alloc_obj_id();
        let pages_ref = self.alloc_obj_id();

        let mut font_resources: HashMap<String, Object> = HashMap::new();
        for (resource, font_obj) in self.font_objects() {
            let font_ref = self.alloc_obj_id();
            font_resources.insert(resource.to_string(), Object::Reference(font_ref));
            objects.push((font_ref, font_obj));
        }

        let pages = std::mem::take(&mut self.pages);
        let mut page_refs: Vec<Object> = Vec::with_capacity(pages.len());
        for page_data in pages {
            let page_ref = self.alloc_obj_id();
            let content_ref = self.alloc_obj_id();

            let mut content_dict = HashMap::new();
            let content_bytes = if self.config.compress {
                let compressed = compress_data(&page_data.content)?;
                log::debug!(
                    "compressed content stream {} -> {} bytes",
                    page_data.content.len(),
                    compressed.len()
                );
                content_dict.insert("Filter".to_string(), ObjectSerializer::name("FlateDecode"));
                compressed
            } else {
                page_data.content
            };

            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("Parent", ObjectSerializer::reference(pages_ref)),
                (
                    "MediaBox",
                    ObjectSerializer::rect(
                        0.0,
                        0.0,
                        page_data.width as f64,
                        page_data.height as f64,
                    ),
                ),
                ("Contents", ObjectSerializer::reference(content_ref)),
                (
                    "Resources",
                    ObjectSerializer::dict(vec![(
                        "Font",
                        Object::Dictionary(font_resources.clone()),
                    )]),
                ),
            ]);

            page_refs.push(Object::Reference(page_ref));
            objects.push((page_ref, page_obj));
            objects.push((
                content_ref,
                Object::Stream {
                    dict: content_dict,
                    data: bytes::Bytes::from(content_bytes),
                },
            ));
        }

        let page_count = page_refs.len();
        objects.push((
            pages_ref,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                ("Kids", Object::Array(page_refs)),
                ("Count", ObjectSerializer::integer(page_count as i64)),
            ]),
        ));
        objects.push((
            catalog_ref,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Catalog")),
                ("Pages", ObjectSerializer::reference(pages_ref)),
            ]),
        ));

        let info_ref = self.alloc_obj_id();
        objects.push((info_ref, self.info_object()?));

        // Write objects in ID order so the xref table is a single run
        objects.sort_by_key(|(obj_ref, _)| obj_ref.id);

        let mut output = Vec::new();
        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker (recommended for binary content)
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let mut xref_offsets: Vec<usize> = Vec::with_capacity(objects.len());
        for (obj_ref, obj) in &objects {
            xref_offsets.push(output.len());
            serializer.write_indirect(&mut output, *obj_ref, obj)?;
        }

        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", self.next_obj_id)?;
        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;
        for offset in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(self.next_obj_id as i64)),
            ("Root", ObjectSerializer::reference(catalog_ref)),
            ("Info", ObjectSerializer::reference(info_ref)),
        ]);

        writeln!(output, "trailer")?;
        serializer.write_object(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        log::debug!("wrote {} pages, {} bytes", page_count, output.len());
        Ok(output)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
