//! Vector path content: rectangles and line segments.

use crate::geometry::Rect;
use crate::layout::Color;

/// Vector path drawn with an optional stroke and an optional fill.
#[derive(Debug, Clone, PartialEq)]
pub struct PathContent {
    /// Bounding box of the path
    pub bbox: Rect,
    /// Path operations
    pub operations: Vec<PathOperation>,
    /// Stroke color (None for no stroke)
    pub stroke_color: Option<Color>,
    /// Fill color (None for no fill)
    pub fill_color: Option<Color>,
    /// Stroke width in points
    pub stroke_width: f32,
}

impl PathContent {
    /// Create a path from operations, stroked in black at 1pt.
    pub fn from_operations(operations: Vec<PathOperation>) -> Self {
        let bbox = Self::compute_bbox(&operations);
        Self {
            bbox,
            operations,
            stroke_color: Some(Color::black()),
            fill_color: None,
            stroke_width: 1.0,
        }
    }

    /// Create a line path from (x1, y1) to (x2, y2).
    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::from_operations(vec![PathOperation::MoveTo(x1, y1), PathOperation::LineTo(x2, y2)])
    }

    /// Create a rectangle path.
    pub fn rect(rect: Rect) -> Self {
        Self::from_operations(vec![PathOperation::Rectangle(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        )])
    }

    /// Create a filled rectangle with no stroke.
    pub fn filled_rect(rect: Rect, color: Color) -> Self {
        Self::rect(rect).with_fill(color).without_stroke()
    }

    /// Set stroke color.
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    /// Remove the stroke.
    pub fn without_stroke(mut self) -> Self {
        self.stroke_color = None;
        self
    }

    /// Set fill color.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Set stroke width.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Check if this path has a stroke.
    pub fn has_stroke(&self) -> bool {
        self.stroke_color.is_some() && self.stroke_width > 0.0
    }

    /// Check if this path has a fill.
    pub fn has_fill(&self) -> bool {
        self.fill_color.is_some()
    }

    fn compute_bbox(operations: &[PathOperation]) -> Rect {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;

        for op in operations {
            let (x0, y0, x1, y1) = match *op {
                PathOperation::MoveTo(x, y) | PathOperation::LineTo(x, y) => (x, y, x, y),
                PathOperation::Rectangle(x, y, w, h) => (x, y, x + w, y + h),
            };
            min_x = min_x.min(x0);
            min_y = min_y.min(y0);
            max_x = max_x.max(x1);
            max_y = max_y.max(y1);
        }

        if operations.is_empty() {
            Rect::new(0.0, 0.0, 0.0, 0.0)
        } else {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        }
    }
}

/// A single path operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOperation {
    /// Move to a point (m operator)
    MoveTo(f32, f32),
    /// Line to a point (l operator)
    LineTo(f32, f32),
    /// Rectangle (re operator)
    /// (x, y, width, height)
    Rectangle(f32, f32, f32, f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_bbox() {
        let line = PathContent::line(50.0, 700.0, 545.0, 700.0);
        assert_eq!(line.bbox, Rect::new(50.0, 700.0, 495.0, 0.0));
        assert!(line.has_stroke());
        assert!(!line.has_fill());
    }

    #[test]
    fn test_filled_rect() {
        let rect = Rect::new(50.0, 600.0, 100.0, 22.0);
        let path = PathContent::filled_rect(rect, Color::gray(0.92));
        assert_eq!(path.bbox, rect);
        assert!(path.has_fill());
        assert!(!path.has_stroke());
    }

    #[test]
    fn test_zero_width_stroke() {
        let path = PathContent::line(0.0, 0.0, 1.0, 1.0).with_stroke_width(0.0);
        assert!(!path.has_stroke());
    }
}
