//! In-memory report document: an ordered list of pages of drawing primitives.
//!
//! Pages are only ever appended, and only the last page receives new
//! elements. Earlier pages are final once a new page has been started.

use crate::elements::{ContentElement, TextContent};

/// One page of drawing primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    elements: Vec<ContentElement>,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive.
    pub fn push(&mut self, element: impl Into<ContentElement>) {
        self.elements.push(element.into());
    }

    /// Primitives in drawing order.
    pub fn elements(&self) -> &[ContentElement] {
        &self.elements
    }

    /// Text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &TextContent> {
        self.elements.iter().filter_map(ContentElement::as_text)
    }

    /// Whether the page contains a text run with exactly this text.
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t.text == text)
    }
}

/// A multi-page document under construction or ready for serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Create a document without pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new page and return it. The previous page becomes final.
    pub fn add_page(&mut self) -> &mut Page {
        self.pages.push(Page::new());
        let index = self.pages.len() - 1;
        &mut self.pages[index]
    }

    /// The page currently being written, if any.
    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.last_mut()
    }

    /// All pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the first page holding a text run with exactly this text.
    pub fn find_text(&self, text: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.contains_text(text))
    }
}
