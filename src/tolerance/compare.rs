//! Relative-epsilon floating point comparisons.
//!
//! Every tolerance here scales with the magnitude of the operands, so the same
//! `eps` behaves consistently for coordinates near 1 and near 10⁶. Absolute
//! tolerances do not.

use crate::primitives::Point2;
use num_traits::Float;

/// Returns `true` if `a` and `b` differ by at most `eps` relative to the
/// larger of their magnitudes.
///
/// Comparing against zero is exact: `approx_equal(x, 0.0, eps)` only holds
/// for `x == 0.0`.
#[inline]
pub fn approx_equal<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= a.abs().max(b.abs()) * eps
}

/// Returns `true` if `a` is less than `b` by more than `eps` relative to the
/// larger of their magnitudes.
///
/// `strictly_less(a, b)` and `strictly_less(b, a)` are never both true, and
/// both are false exactly when `approx_equal(a, b)` holds.
#[inline]
pub fn strictly_less<F: Float>(a: F, b: F, eps: F) -> bool {
    (b - a) > a.abs().max(b.abs()) * eps
}

/// Component-wise [`approx_equal`] for points.
#[inline]
pub fn points_approx_equal<F: Float>(p: Point2<F>, q: Point2<F>, eps: F) -> bool {
    approx_equal(p.x, q.x, eps) && approx_equal(p.y, q.y, eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_equal_scales_with_magnitude() {
        let eps = 1e-9;
        assert!(approx_equal(1.0e6_f64, 1.0e6 + 1e-4, eps));
        assert!(!approx_equal(1.0_f64, 1.0 + 1e-4, eps));
        assert!(approx_equal(-3.0_f64, -3.0, eps));
    }

    #[test]
    fn test_zero_comparisons_are_exact() {
        let eps = f64::EPSILON;
        assert!(approx_equal(0.0_f64, 0.0, eps));
        assert!(!approx_equal(1e-300_f64, 0.0, eps));
        assert!(strictly_less(0.0_f64, 1e-300, eps));
        assert!(strictly_less(-1e-300_f64, 0.0, eps));
    }

    #[test]
    fn test_strictly_less_is_asymmetric() {
        let eps = 1e-6;
        for &(a, b) in &[(1.0_f64, 2.0), (1.0, 1.0 + 1e-9), (-5.0, 5.0), (7.0, 7.0)] {
            assert!(!(strictly_less(a, b, eps) && strictly_less(b, a, eps)));
            let neither = !strictly_less(a, b, eps) && !strictly_less(b, a, eps);
            assert_eq!(neither, approx_equal(a, b, eps));
        }
    }

    #[test]
    fn test_points_approx_equal() {
        let p = Point2::new(1.0_f32, 2.0);
        assert!(points_approx_equal(p, Point2::new(1.0, 2.0), f32::EPSILON));
        assert!(!points_approx_equal(p, Point2::new(1.0, 2.001), f32::EPSILON));
    }
}
