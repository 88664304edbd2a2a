//! PDF content stream builder.
//!
//! Builds page content streams from the text runs and paths produced by the
//! layout engine, using the operator subset of ISO 32000-1:2008 Sections 8-9
//! that a plan page needs: text objects, RGB colors, lines and rectangles.

use crate::elements::{ContentElement, PathContent, PathOperation, TextContent};
use crate::error::Result;
use crate::layout::Color;
use crate::writer::font_manager::{encode_win_ansi, FontManager};
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(String, f32),
    /// Set text matrix (Tm)
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Show text (Tj), WinAnsi-encoded when written
    ShowText(String),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f32, f32, f32),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f32, f32, f32),
    /// Set line width (w)
    SetLineWidth(f32),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Rectangle (re)
    Rectangle(f32, f32, f32, f32),
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,
    /// Fill and stroke (B)
    FillStroke,
    /// End path without filling/stroking (n)
    EndPath,
}

/// Builder for PDF content streams.
///
/// Creates the byte sequence for a page content stream from operations
/// or [`ContentElement`]s. Font and fill color changes are only emitted
/// when they differ from the current state.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Resource names for the two report fonts
    fonts: FontManager,
    /// Current font name
    current_font: Option<String>,
    /// Current font size
    current_font_size: f32,
    /// Current non-stroking color, `None` until first set
    current_fill: Option<Color>,
    /// Whether we're in a text object
    in_text_object: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Operations recorded so far.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
        }
        self
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
        }
        self
    }

    /// Set font for text operations.
    pub fn set_font(&mut self, font_name: &str, size: f32) -> &mut Self {
        if self.current_font.as_deref() != Some(font_name) || self.current_font_size != size {
            self.op(ContentStreamOp::SetFont(font_name.to_string(), size));
            self.current_font = Some(font_name.to_string());
            self.current_font_size = size;
        }
        self
    }

    /// Add text at a baseline position.
    pub fn text(&mut self, text: &str, x: f32, y: f32) -> &mut Self {
        self.begin_text();
        self.op(ContentStreamOp::SetTextMatrix(1.0, 0.0, 0.0, 1.0, x, y));
        self.op(ContentStreamOp::ShowText(text.to_string()))
    }

    /// Set fill color.
    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        if self.current_fill != Some(color) {
            self.op(ContentStreamOp::SetFillColorRGB(color.r, color.g, color.b));
            self.current_fill = Some(color);
        }
        self
    }

    /// Set stroke color.
    pub fn stroke_color(&mut self, color: Color) -> &mut Self {
        self.op(ContentStreamOp::SetStrokeColorRGB(color.r, color.g, color.b))
    }

    /// Set line width.
    pub fn set_line_width(&mut self, width: f32) -> &mut Self {
        self.op(ContentStreamOp::SetLineWidth(width))
    }

    /// Move to a point (start a new subpath).
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x, y))
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::LineTo(x, y))
    }

    /// Add a rectangle to the current path.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Stroke)
    }

    /// Fill the current path.
    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    /// Save graphics state.
    pub fn save_state(&mut self) -> &mut Self {
        self.op(ContentStreamOp::SaveState)
    }

    /// Restore graphics state.
    pub fn restore_state(&mut self) -> &mut Self {
        self.current_fill = None;
        self.op(ContentStreamOp::RestoreState)
    }

    /// Add a content element.
    pub fn add_element(&mut self, element: &ContentElement) -> &mut Self {
        match element {
            ContentElement::Text(text) => self.add_text_content(text),
            ContentElement::Path(path) => self.add_path_content(path),
        }
    }

    /// Add all elements of a page in drawing order.
    pub fn add_elements(&mut self, elements: &[ContentElement]) -> &mut Self {
        for element in elements {
            self.add_element(element);
        }
        self.end_text()
    }

    fn add_text_content(&mut self, text: &TextContent) -> &mut Self {
        self.begin_text();
        self.fill_color(text.color);
        let font_name = self.fonts.resource_name(text.weight);
        self.set_font(font_name, text.size);
        self.text(&text.text, text.origin.x, text.origin.y)
    }

    fn add_path_content(&mut self, path: &PathContent) -> &mut Self {
        self.end_text();

        if let Some(color) = path.stroke_color {
            self.stroke_color(color);
            self.set_line_width(path.stroke_width);
        }
        if let Some(color) = path.fill_color {
            self.fill_color(color);
        }

        for op in &path.operations {
            match *op {
                PathOperation::MoveTo(x, y) => self.move_to(x, y),
                PathOperation::LineTo(x, y) => self.line_to(x, y),
                PathOperation::Rectangle(x, y, w, h) => self.rect(x, y, w, h),
            };
        }

        match (path.has_stroke(), path.has_fill()) {
            (true, true) => self.op(ContentStreamOp::FillStroke),
            (true, false) => self.op(ContentStreamOp::Stroke),
            (false, true) => self.op(ContentStreamOp::Fill),
            (false, false) => self.op(ContentStreamOp::EndPath),
        }
    }

    /// Serialize the operations, one per line.
    ///
    /// Fails with an encoding error if a text run holds a character outside
    /// WinAnsi.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }

        Ok(buf)
    }

    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> Result<()> {
        match op {
            ContentStreamOp::SaveState => write!(w, "q")?,
            ContentStreamOp::RestoreState => write!(w, "Q")?,
            ContentStreamOp::BeginText => write!(w, "BT")?,
            ContentStreamOp::EndText => write!(w, "ET")?,
            ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, size)?,
            ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => {
                write!(w, "{} {} {} {} {} {} Tm", a, b, c, d, e, f)?
            },
            ContentStreamOp::ShowText(text) => {
                write!(w, "(")?;
                write_escaped_bytes(w, &encode_win_ansi(text)?)?;
                write!(w, ") Tj")?
            },
            ContentStreamOp::SetFillColorRGB(r, g, b) => write!(w, "{} {} {} rg", r, g, b)?,
            ContentStreamOp::SetStrokeColorRGB(r, g, b) => write!(w, "{} {} {} RG", r, g, b)?,
            ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", width)?,
            ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", x, y)?,
            ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", x, y)?,
            ContentStreamOp::Rectangle(x, y, w_val, h) => {
                write!(w, "{} {} {} {} re", x, y, w_val, h)?
            },
            ContentStreamOp::Stroke => write!(w, "S")?,
            ContentStreamOp::Fill => write!(w, "f")?,
            ContentStreamOp::FillStroke => write!(w, "B")?,
            ContentStreamOp::EndPath => write!(w, "n")?,
        }
        Ok(())
    }
}

/// Write bytes inside a literal string, escaping delimiters and backslashes.
fn write_escaped_bytes<W: Write>(w: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    for &byte in bytes {
        match byte {
            b'(' => w.write_all(b"\\(")?,
            b')' => w.write_all(b"\\)")?,
            b'\\' => w.write_all(b"\\\\")?,
            _ => w.write_all(&[byte])?,
        }
    }
    Ok(())
}
