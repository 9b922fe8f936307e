//! Point and line in the plane

use std::fmt;

/// A point with two coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Renders as `(x, y)`; whole numbers print without a fractional part.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered pair of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub pt1: Point,
    pub pt2: Point,
}

impl Line {
    pub fn new(pt1: Point, pt2: Point) -> Self {
        Self { pt1, pt2 }
    }

    pub fn length(&self) -> f64 {
        self.pt1.distance_to(&self.pt2)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.pt1, self.pt2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_345_triangle_when_distance_then_exactly_five() {
        let a = Point::new(3.0, 2.0);
        let b = Point::new(-1.0, 5.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn given_line_when_display_then_uses_point_rendering() {
        let line = Line::new(Point::new(3.0, 2.0), Point::new(-1.0, 5.0));
        assert_eq!(line.to_string(), "(3, 2) <-> (-1, 5)");
    }

    #[test]
    fn given_fractional_coordinates_when_display_then_keeps_fraction() {
        assert_eq!(Point::new(0.5, -2.25).to_string(), "(0.5, -2.25)");
    }
}
