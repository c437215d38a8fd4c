//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// The segment is oriented: `a` is its first endpoint and `b` its second.
/// Equality compares endpoints in order, so a segment and its reverse are
/// not equal.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>) -> Self {
        Self { a, b }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            a: Point2::new(x1, y1),
            b: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from `a` to `b`.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.b - self.a
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.a.distance_squared(self.b)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.a.distance(self.b)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.a.midpoint(self.b)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `a`
    /// - `t = 1` returns `b`
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.a.lerp(self.b, t)
    }

    /// Returns the reversed segment (endpoints swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((a, b): (Point2<F>, Point2<F>)) -> Self {
        Self::new(a, b)
    }
}
