//! Clockwise angular ordering around a fixed vertex.

use super::active::StrictWeakOrder;
use crate::primitives::Point2;
use crate::tolerance::{approx_equal, strictly_less};
use num_traits::Float;

/// Orders points by the clockwise angle they make around `vertex`, starting
/// from the ray pointing in the `+y` direction.
///
/// Points strictly left of the vertex come after every other point, which
/// places the branch cut on the upward ray. Points on the vertical line
/// through the vertex are ordered by `y` (those above before those below,
/// and farther ones first on either side). Points at the same angle are
/// ordered nearest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleOrder<F> {
    /// The center of rotation.
    pub vertex: Point2<F>,
    /// Relative tolerance for all comparisons.
    pub epsilon: F,
}

impl<F: Float> AngleOrder<F> {
    /// Creates an ordering around `vertex`.
    #[inline]
    pub fn new(vertex: Point2<F>, epsilon: F) -> Self {
        Self { vertex, epsilon }
    }

    /// Returns `true` if `a` comes strictly before `b` clockwise.
    pub fn less(&self, a: &Point2<F>, b: &Point2<F>) -> bool {
        let eps = self.epsilon;
        let v = self.vertex;

        let a_left = strictly_less(a.x, v.x, eps);
        let b_left = strictly_less(b.x, v.x, eps);
        if a_left != b_left {
            return b_left;
        }

        if approx_equal(a.x, v.x, eps) && approx_equal(b.x, v.x, eps) {
            if !strictly_less(a.y, v.y, eps) || !strictly_less(b.y, v.y, eps) {
                return strictly_less(b.y, a.y, eps);
            }
            return strictly_less(a.y, b.y, eps);
        }

        let va = *a - v;
        let vb = *b - v;
        let det = va.cross(vb);
        if approx_equal(det, F::zero(), eps) {
            return va.magnitude_squared() < vb.magnitude_squared();
        }
        det < F::zero()
    }
}

impl<F: Float> StrictWeakOrder<Point2<F>> for AngleOrder<F> {
    #[inline]
    fn less(&self, a: &Point2<F>, b: &Point2<F>) -> bool {
        AngleOrder::less(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn order() -> AngleOrder<f64> {
        AngleOrder::new(Point2::origin(), f64::EPSILON)
    }

    #[test]
    fn test_full_turn_is_clockwise_from_up() {
        let cmp = order();
        let ring = [
            p(0.0, 5.0),
            p(2.0, 3.0),
            p(6.0, 6.0),
            p(3.0, 0.0),
            p(2.0, -1.0),
            p(0.0, -5.0),
            p(-5.0, -1.0),
            p(-4.0, 0.0),
            p(-1.0, 5.0),
        ];
        for i in 0..ring.len() {
            for j in 0..ring.len() {
                assert_eq!(cmp.less(&ring[i], &ring[j]), i < j, "{i} vs {j}");
            }
        }
    }

    #[test]
    fn test_right_half_before_left_half() {
        let cmp = order();
        assert!(cmp.less(&p(1.0, -5.0), &p(-1.0, 5.0)));
        assert!(!cmp.less(&p(-1.0, 5.0), &p(1.0, -5.0)));
    }

    #[test]
    fn test_same_direction_nearer_first() {
        let cmp = order();
        assert!(cmp.less(&p(1.0, 1.0), &p(2.0, 2.0)));
        assert!(!cmp.less(&p(2.0, 2.0), &p(1.0, 1.0)));
        assert!(cmp.less(&p(-1.0, -1.0), &p(-3.0, -3.0)));
    }

    #[test]
    fn test_vertical_line_farther_first() {
        let cmp = order();
        assert!(cmp.less(&p(0.0, 5.0), &p(0.0, 2.0)));
        assert!(!cmp.less(&p(0.0, 2.0), &p(0.0, 5.0)));
        assert!(cmp.less(&p(0.0, -5.0), &p(0.0, -2.0)));
        assert!(cmp.less(&p(0.0, 2.0), &p(0.0, -5.0)));
    }

    #[test]
    fn test_offset_vertex() {
        let cmp = AngleOrder::new(p(10.0, 10.0), f64::EPSILON);
        assert!(cmp.less(&p(10.0, 20.0), &p(20.0, 10.0)));
        assert!(cmp.less(&p(20.0, 10.0), &p(10.0, 0.0)));
        assert!(cmp.less(&p(10.0, 0.0), &p(0.0, 10.0)));
    }
}
