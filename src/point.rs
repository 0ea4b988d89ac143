//! 2D points in raster-pixel space.

/// A point in raster-pixel coordinates.
///
/// Point sequences produced by extraction carry no ordering semantics of
/// their own, but the order is stable and meaningful: DBSCAN traverses
/// points in input order, which decides where order-sensitive border points
/// land (see [`crate::cluster::Dbscan`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// X coordinate (column), in pixels.
    pub x: f32,
    /// Y coordinate (row), in pixels.
    pub y: f32,
}

impl Point {
    /// Create a point from pixel coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(-1.5, 2.0);
        let b = Point::new(4.0, -3.25);
        assert_eq!(a.distance(&b), b.distance(&a));
    }
}
