//! Axis-aligned bounding box used to close off open scenes.

use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates the smallest AABB containing every point.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |aabb, p| {
            Self::new(
                Point2::new(aabb.min.x.min(p.x), aabb.min.y.min(p.y)),
                Point2::new(aabb.max.x.max(p.x), aabb.max.y.max(p.y)),
            )
        }))
    }

    /// Creates the smallest AABB containing every segment endpoint.
    pub fn from_segments<'a, I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Segment2<F>>,
        F: 'a,
    {
        Self::from_points(segments.into_iter().flat_map(|s| [s.a, s.b]))
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns a copy grown by `margin` on every side.
    #[inline]
    pub fn expand(self, margin: F) -> Self {
        let m = Vec2::splat(margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Returns `true` if the point is inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the point is strictly inside (not on the boundary).
    #[inline]
    pub fn contains_point_strict(self, p: Point2<F>) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Returns the four corners clockwise, starting at the top-left.
    pub fn corners(self) -> [Point2<F>; 4] {
        [
            Point2::new(self.min.x, self.max.y),
            self.max,
            Point2::new(self.max.x, self.min.y),
            self.min,
        ]
    }

    /// Returns the four boundary edges clockwise, starting with the top edge.
    pub fn edges(self) -> [Segment2<F>; 4] {
        let c = self.corners();
        [
            Segment2::new(c[0], c[1]),
            Segment2::new(c[1], c[2]),
            Segment2::new(c[2], c[3]),
            Segment2::new(c[3], c[0]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners() {
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point2::new(10.0, 10.0), Point2::new(0.0, 0.0));
        assert_eq!(aabb.min, Point2::new(0.0, 0.0));
        assert_eq!(aabb.max, Point2::new(10.0, 10.0));
        assert_eq!(aabb.center(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_from_segments() {
        let segments = [
            Segment2::from_coords(1.0, 2.0, -3.0, 5.0),
            Segment2::from_coords(4.0, -1.0, 0.0, 0.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_segments(&segments).unwrap();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));

        let none: [Segment2<f64>; 0] = [];
        assert!(Aabb2::from_segments(&none).is_none());
    }

    #[test]
    fn test_expand() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0));
        let grown = aabb.expand(1.0);
        assert_eq!(grown.min, Point2::new(-1.0, -1.0));
        assert_eq!(grown.width(), 12.0);
        assert_eq!(grown.height(), 7.0);
    }

    #[test]
    fn test_contains_point() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));

        assert!(aabb.contains_point(Point2::new(5.0, 5.0)));
        assert!(aabb.contains_point(Point2::new(0.0, 0.0)));
        assert!(!aabb.contains_point(Point2::new(-1.0, 5.0)));

        assert!(aabb.contains_point_strict(Point2::new(5.0, 5.0)));
        assert!(!aabb.contains_point_strict(Point2::new(0.0, 5.0)));
        assert!(!aabb.contains_point_strict(Point2::new(5.0, 10.0)));
    }

    #[test]
    fn test_edges_are_clockwise_and_closed() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(-1.0, -2.0), Point2::new(3.0, 4.0));
        let edges = aabb.edges();
        for i in 0..4 {
            assert_eq!(edges[i].b, edges[(i + 1) % 4].a);
        }
        assert_eq!(edges[0].a, Point2::new(-1.0, 4.0));
        // Moving along the top edge is moving right, so the interior is on the right.
        assert!(edges[0].direction().x > 0.0);
    }
}
