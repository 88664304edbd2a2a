//! Drawing primitives placed on report pages.
//!
//! The layout engine produces `ContentElement`s and the content stream builder
//! turns them into PDF operators. Coordinates are absolute page coordinates.

mod path;
mod text;

pub use path::{PathContent, PathOperation};
pub use text::TextContent;

use crate::geometry::Rect;

/// A drawing primitive on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentElement {
    /// Positioned text run
    Text(TextContent),
    /// Filled and/or stroked vector path
    Path(PathContent),
}

impl ContentElement {
    /// Text content, if this is a text run.
    pub fn as_text(&self) -> Option<&TextContent> {
        match self {
            ContentElement::Text(text) => Some(text),
            ContentElement::Path(_) => None,
        }
    }

    /// Path content, if this is a path.
    pub fn as_path(&self) -> Option<&PathContent> {
        match self {
            ContentElement::Path(path) => Some(path),
            ContentElement::Text(_) => None,
        }
    }

    /// Bounding box of paths; text runs report a zero-size box at their origin.
    pub fn bbox(&self) -> Rect {
        match self {
            ContentElement::Text(t) => Rect::new(t.origin.x, t.origin.y, 0.0, 0.0),
            ContentElement::Path(p) => p.bbox,
        }
    }
}

impl From<TextContent> for ContentElement {
    fn from(text: TextContent) -> Self {
        ContentElement::Text(text)
    }
}

impl From<PathContent> for ContentElement {
    fn from(path: PathContent) -> Self {
        ContentElement::Path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let text: ContentElement = TextContent::new("a", 50.0, 700.0, 12.0).into();
        assert!(text.as_text().is_some());
        assert!(text.as_path().is_none());
        assert_eq!(text.bbox().x, 50.0);

        let path: ContentElement = PathContent::line(0.0, 0.0, 10.0, 0.0).into();
        assert!(path.as_path().is_some());
        assert_eq!(path.bbox().width, 10.0);
    }
}
