//! Geometric primitives in PDF user space.
//!
//! The origin is the bottom-left corner of the page and y grows upwards, so a
//! rectangle's `y` is its lower edge.

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use planpdf::geometry::Point;
    ///
    /// let point = Point::new(50.0, 762.0);
    /// assert_eq!(point.x, 50.0);
    /// assert_eq!(point.y, 762.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the left edge
    pub x: f32,
    /// Y coordinate of the bottom edge
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its lower-left corner and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use planpdf::geometry::Rect;
    ///
    /// let rect = Rect::new(50.0, 600.0, 495.0, 40.0);
    /// assert_eq!(rect.top(), 640.0);
    /// assert_eq!(rect.right(), 545.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle hanging down from a top edge.
    pub fn from_top(x: f32, top: f32, width: f32, height: f32) -> Self {
        Self::new(x, top - height, width, height)
    }

    /// Left edge.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether a point lies inside or on the border of this rectangle.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().max(other.right());
        let top = self.top().max(other.top());
        Rect::new(left, bottom, right - left, top - bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 20.0);
        assert_eq!(rect.top(), 60.0);
    }

    #[test]
    fn test_rect_from_top() {
        let rect = Rect::from_top(50.0, 756.0, 495.0, 20.0);
        assert_eq!(rect.y, 736.0);
        assert_eq!(rect.top(), 756.0);
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains_point(&Point::new(50.0, 25.0)));
        assert!(rect.contains_point(&Point::new(100.0, 50.0)));
        assert!(!rect.contains_point(&Point::new(101.0, 25.0)));
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 10.0, 10.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, -5.0, 15.0, 15.0));
    }
}
