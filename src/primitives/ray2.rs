//! 2D ray type.

use super::{Point2, Segment2, Vec2};
use crate::tolerance::{approx_equal, orientation, Orientation};
use num_traits::Float;

/// Absolute slack on the segment parameter, in multiples of `eps`.
const PARAM_SLACK: f64 = 8.0;

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin in the direction specified.
/// The direction is stored as-is (not necessarily normalized).
///
/// # Example
///
/// ```
/// use sightline::primitives::{Point2, Ray2, Segment2, Vec2};
///
/// let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
/// let segment = Segment2::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
///
/// let hit = ray.intersect_segment(&segment, f64::EPSILON);
/// assert_eq!(hit, Some(Point2::new(5.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from an origin point through a target point.
    #[inline]
    pub fn from_points(origin: Point2<F>, through: Point2<F>) -> Self {
        Self {
            origin,
            direction: through - origin,
        }
    }

    /// Returns the point along the ray at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Finds the intersection of this ray with a segment nearest to the origin.
    ///
    /// When the ray is parallel to the segment and runs along it, the nearest
    /// point of the segment is returned: the origin itself if the segment
    /// straddles it, otherwise the closer endpoint ahead of the origin. A
    /// collinear segment lying entirely behind the origin is missed.
    ///
    /// The segment parameter is accepted a few `eps` past either end, so a
    /// ray aimed at an endpoint hits it despite rounding.
    ///
    /// Returns `None` if the ray misses the segment.
    pub fn intersect_segment(&self, segment: &Segment2<F>, eps: F) -> Option<Point2<F>> {
        let ao = self.origin - segment.a;
        let ab = segment.direction();
        let det = ab.cross(self.direction);

        if approx_equal(det, F::zero(), eps) {
            return self.intersect_collinear(segment, eps);
        }

        // The quotient can land a few ulps outside [0, 1] for a ray aimed
        // exactly at an endpoint.
        let slack = F::from(PARAM_SLACK).map_or(eps, |k| k * eps);
        let u = ao.cross(self.direction) / det;
        if u < -slack || u > F::one() + slack {
            return None;
        }

        let t = -ab.cross(ao) / det;
        if approx_equal(t, F::zero(), eps) || t > F::zero() {
            Some(self.point_at(t))
        } else {
            None
        }
    }

    fn intersect_collinear(&self, segment: &Segment2<F>, eps: F) -> Option<Point2<F>> {
        if orientation(segment.a, segment.b, self.origin, eps) != Orientation::Collinear {
            return None;
        }

        // Positive when the endpoint is behind the origin.
        let behind_a = (self.origin - segment.a).dot(self.direction);
        let behind_b = (self.origin - segment.b).dot(self.direction);
        let zero = F::zero();

        if behind_a > zero && behind_b > zero {
            None
        } else if (behind_a > zero) != (behind_b > zero) {
            Some(self.origin)
        } else if behind_a > behind_b {
            Some(segment.a)
        } else {
            Some(segment.b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = f64::EPSILON;

    fn ray(ox: f64, oy: f64, dx: f64, dy: f64) -> Ray2<f64> {
        Ray2::new(Point2::new(ox, oy), Vec2::new(dx, dy))
    }

    #[test]
    fn test_from_points_and_point_at() {
        let r: Ray2<f64> = Ray2::from_points(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(r.direction, Vec2::new(3.0, 4.0));
        assert_eq!(r.point_at(0.0), r.origin);
        assert_eq!(r.point_at(2.0), Point2::new(7.0, 9.0));
    }

    #[test]
    fn test_hit_through_point_not_on_segment() {
        // Direction reaches only halfway; the ray keeps going.
        let r = ray(0.0, 0.0, 5.0, 2.0);
        let wall = Segment2::from_coords(10.0, 10.0, 10.0, -10.0);
        let hit = r.intersect_segment(&wall, EPS).unwrap();
        assert_relative_eq!(hit.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(hit.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hit_at_endpoint() {
        let r = ray(0.0, 0.0, 1.0, 1.0);
        let s = Segment2::from_coords(3.0, 3.0, 3.0, -3.0);
        assert_eq!(r.intersect_segment(&s, EPS), Some(Point2::new(3.0, 3.0)));
    }

    #[test]
    fn test_hit_at_endpoint_despite_rounding() {
        // The segment parameter rounds to just above 1 here.
        let v = Point2::new(4.5975, 5.2255);
        let r = Ray2::from_points(Point2::origin(), v);
        let s = Segment2::new(Point2::new(6.0371, 8.9361), v);
        let hit = r.intersect_segment(&s, EPS).unwrap();
        assert_relative_eq!(hit.x, v.x, epsilon = 1e-12);
        assert_relative_eq!(hit.y, v.y, epsilon = 1e-12);

        let hit = r.intersect_segment(&s.reversed(), EPS).unwrap();
        assert_relative_eq!(hit.x, v.x, epsilon = 1e-12);
        assert_relative_eq!(hit.y, v.y, epsilon = 1e-12);
    }

    #[test]
    fn test_near_miss_past_endpoint() {
        let r = ray(0.0, 0.0, 1.0, 0.0);
        let s = Segment2::from_coords(5.0, 1e-6, 5.0, 3.0);
        assert_eq!(r.intersect_segment(&s, EPS), None);
    }

    #[test]
    fn test_miss_beside_segment() {
        let r = ray(0.0, 0.0, 1.0, 0.0);
        let s = Segment2::from_coords(5.0, 1.0, 5.0, 3.0);
        assert_eq!(r.intersect_segment(&s, EPS), None);
    }

    #[test]
    fn test_miss_behind_origin() {
        let r = ray(0.0, 0.0, 1.0, 0.0);
        let s = Segment2::from_coords(-5.0, -1.0, -5.0, 1.0);
        assert_eq!(r.intersect_segment(&s, EPS), None);
    }

    #[test]
    fn test_parallel_not_collinear() {
        let r = ray(0.0, 0.0, 1.0, 0.0);
        let s = Segment2::from_coords(1.0, 1.0, 5.0, 1.0);
        assert_eq!(r.intersect_segment(&s, EPS), None);
    }

    #[test]
    fn test_collinear_ahead_returns_nearer_endpoint() {
        let r = ray(0.0, 0.0, 1.0, 0.0);
        let s = Segment2::from_coords(7.0, 0.0, 3.0, 0.0);
        assert_eq!(r.intersect_segment(&s, EPS), Some(Point2::new(3.0, 0.0)));
        assert_eq!(
            r.intersect_segment(&s.reversed(), EPS),
            Some(Point2::new(3.0, 0.0))
        );
    }

    #[test]
    fn test_collinear_straddling_returns_origin() {
        let r = ray(1.0, 0.0, 1.0, 0.0);
        let s = Segment2::from_coords(-2.0, 0.0, 4.0, 0.0);
        assert_eq!(r.intersect_segment(&s, EPS), Some(Point2::new(1.0, 0.0)));
    }

    #[test]
    fn test_collinear_behind_misses() {
        let r = ray(0.0, 0.0, 1.0, 0.0);
        let s = Segment2::from_coords(-7.0, 0.0, -3.0, 0.0);
        assert_eq!(r.intersect_segment(&s, EPS), None);
    }
}
