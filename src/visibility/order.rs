//! Near-to-far ordering of obstacle segments as seen from the observer.

use super::active::StrictWeakOrder;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{orientation, points_approx_equal, Orientation};
use num_traits::Float;
use std::mem::swap;

/// Orders segments by their distance from an observer along a shared ray.
///
/// No distance is ever computed: the order is decided from orientation
/// predicates alone. It is only a strict weak order when, for every pair of
/// segments compared,
///
/// 1. some ray from the observer hits both,
/// 2. they do not cross except at a shared endpoint, and
/// 3. neither is collinear with the observer.
///
/// The sweep guarantees this for the segments it keeps active. Comparing
/// anything else gives an unspecified answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistanceOrder<F> {
    /// The observer position.
    pub observer: Point2<F>,
    /// Relative tolerance for all predicates.
    pub epsilon: F,
}

impl<F: Float> SegmentDistanceOrder<F> {
    /// Creates an ordering around `observer`.
    #[inline]
    pub fn new(observer: Point2<F>, epsilon: F) -> Self {
        Self { observer, epsilon }
    }

    /// Returns `true` if `x` is strictly nearer to the observer than `y`.
    pub fn less(&self, x: &Segment2<F>, y: &Segment2<F>) -> bool {
        let eps = self.epsilon;
        let o = self.observer;
        let same = |p: Point2<F>, q: Point2<F>| points_approx_equal(p, q, eps);
        let orient = |p, q, r| orientation(p, q, r, eps);

        let (mut a, mut b) = (x.a, x.b);
        let (mut c, mut d) = (y.a, y.b);

        debug_assert!(
            orient(o, a, b) != Orientation::Collinear,
            "left segment must not be collinear with the observer"
        );
        debug_assert!(
            orient(o, c, d) != Orientation::Collinear,
            "right segment must not be collinear with the observer"
        );

        // A shared endpoint, if any, ends up in `a` and `c`.
        if same(b, c) || same(b, d) {
            swap(&mut a, &mut b);
        }
        if same(a, d) {
            swap(&mut c, &mut d);
        }

        if same(a, c) {
            let oad = orient(o, a, d);
            let oab = orient(o, a, b);
            if same(b, d) || oad != oab {
                return false;
            }
            return orient(a, b, d) != orient(a, b, o);
        }

        let cda = orient(c, d, a);
        let cdb = orient(c, d, b);
        if cda == Orientation::Collinear && cdb == Orientation::Collinear {
            o.distance_squared(a) < o.distance_squared(c)
        } else if cda == cdb || cda == Orientation::Collinear || cdb == Orientation::Collinear {
            let cdo = orient(c, d, o);
            cdo == cda || cdo == cdb
        } else {
            orient(a, b, o) != orient(a, b, c)
        }
    }
}

impl<F: Float> StrictWeakOrder<Segment2<F>> for SegmentDistanceOrder<F> {
    #[inline]
    fn less(&self, a: &Segment2<F>, b: &Segment2<F>) -> bool {
        SegmentDistanceOrder::less(self, a, b)
    }
}
