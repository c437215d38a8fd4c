//! Geometric predicates with explicit relative tolerance.

use super::compare::{points_approx_equal, strictly_less};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `c` lies to the left of the directed line `a → b` (counter-clockwise).
    LeftTurn,
    /// `c` lies to the right of the directed line `a → b` (clockwise).
    RightTurn,
    /// The points are collinear.
    Collinear,
}

/// Computes the orientation of three points.
///
/// The sign of `cross(b - a, c - a)` is taken through [`strictly_less`]
/// against zero, so every predicate in the crate breaks ties the same way.
///
/// # Example
///
/// ```
/// use sightline::{orientation, Orientation, Point2};
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let eps = f64::EPSILON;
///
/// assert_eq!(orientation(a, b, Point2::new(0.5, 1.0), eps), Orientation::LeftTurn);
/// assert_eq!(orientation(a, b, Point2::new(0.5, -1.0), eps), Orientation::RightTurn);
/// assert_eq!(orientation(a, b, Point2::new(2.0, 0.0), eps), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let det = (b - a).cross(c - a);
    if strictly_less(F::zero(), det, eps) {
        Orientation::LeftTurn
    } else if strictly_less(det, F::zero(), eps) {
        Orientation::RightTurn
    } else {
        Orientation::Collinear
    }
}

/// Tests whether two segments touch anywhere other than at a shared endpoint.
///
/// Proper crossings, T-junctions (an endpoint of one segment lying inside the
/// other) and collinear overlaps all count. Segments that only meet at a
/// common endpoint, and exact duplicates, do not.
pub fn segments_cross<F: Float>(s: Segment2<F>, t: Segment2<F>, eps: F) -> bool {
    let o1 = orientation(s.a, s.b, t.a, eps);
    let o2 = orientation(s.a, s.b, t.b, eps);
    let o3 = orientation(t.a, t.b, s.a, eps);
    let o4 = orientation(t.a, t.b, s.b, eps);

    let collinear = Orientation::Collinear;
    if o1 != collinear && o2 != collinear && o3 != collinear && o4 != collinear {
        return o1 != o2 && o3 != o4;
    }

    (o1 == collinear && lies_inside(s, t.a, eps))
        || (o2 == collinear && lies_inside(s, t.b, eps))
        || (o3 == collinear && lies_inside(t, s.a, eps))
        || (o4 == collinear && lies_inside(t, s.b, eps))
}

/// Whether `p`, known to be on the line through `seg`, is strictly between its
/// endpoints.
fn lies_inside<F: Float>(seg: Segment2<F>, p: Point2<F>, eps: F) -> bool {
    if points_approx_equal(p, seg.a, eps) || points_approx_equal(p, seg.b, eps) {
        return false;
    }
    let d = seg.direction();
    (p - seg.a).dot(d) > F::zero() && (seg.b - p).dot(d) > F::zero()
}
