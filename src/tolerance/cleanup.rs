//! Vertex cleanup for closed vertex loops.

use super::compare::points_approx_equal;
use super::predicates::{orientation, Orientation};
use crate::primitives::Point2;
use num_traits::Float;

/// Removes every vertex that is collinear with its neighbours, in place.
///
/// The loop is treated as closed. Each vertex is tested against the last
/// vertex kept so far (or the final input vertex, before anything is kept)
/// and the next input vertex.
///
/// Repeated vertices are collapsed first. A loop left with fewer than three
/// vertices is returned as is.
///
/// # Example
///
/// ```
/// use sightline::tolerance::remove_collinear_vertices;
/// use sightline::Point2;
///
/// let mut square = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0), // on the edge
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
/// remove_collinear_vertices(&mut square, f64::EPSILON);
/// assert_eq!(square.len(), 4);
/// ```
pub fn remove_collinear_vertices<F: Float>(vertices: &mut Vec<Point2<F>>, eps: F) {
    vertices.dedup_by(|b, a| points_approx_equal(*a, *b, eps));
    while vertices.len() > 1
        && points_approx_equal(vertices[0], vertices[vertices.len() - 1], eps)
    {
        vertices.pop();
    }

    let n = vertices.len();
    if n < 3 {
        return;
    }

    let mut kept = 0;
    for i in 0..n {
        let prev = if kept == 0 {
            vertices[n - 1]
        } else {
            vertices[kept - 1]
        };
        let current = vertices[i];
        let next = vertices[(i + 1) % n];

        if orientation(prev, current, next, eps) != Orientation::Collinear {
            vertices[kept] = current;
            kept += 1;
        }
    }
    vertices.truncate(kept);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_removes_duplicates_and_midpoints() {
        let mut v = vec![
            p(10.0, 10.0),
            p(10.0, 10.0),
            p(10.0, 0.0),
            p(10.0, -10.0),
            p(-10.0, -10.0),
            p(-10.0, -10.0),
            p(-10.0, 10.0),
        ];
        remove_collinear_vertices(&mut v, f64::EPSILON);
        assert_eq!(
            v,
            vec![p(10.0, 10.0), p(10.0, -10.0), p(-10.0, -10.0), p(-10.0, 10.0)]
        );
    }

    #[test]
    fn test_keeps_reflex_and_convex_corners() {
        let mut v = vec![p(0.0, 0.0), p(4.0, 0.0), p(2.0, 1.0), p(4.0, 4.0), p(0.0, 4.0)];
        let expected = v.clone();
        remove_collinear_vertices(&mut v, f64::EPSILON);
        assert_eq!(v, expected);
    }

    #[test]
    fn test_short_loops_untouched() {
        let mut two = vec![p(5.0, 5.0), p(5.0, -5.0)];
        remove_collinear_vertices(&mut two, f64::EPSILON);
        assert_eq!(two.len(), 2);

        let mut empty: Vec<Point2<f64>> = Vec::new();
        remove_collinear_vertices(&mut empty, f64::EPSILON);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_repeats_collapse_before_short_loop_check() {
        // An open chain that ends in a repeated vertex keeps both points.
        let mut v = vec![p(0.5, 6.5), p(4.5, 5.0), p(4.5, 5.0), p(4.5, 5.0)];
        remove_collinear_vertices(&mut v, f64::EPSILON);
        assert_eq!(v, vec![p(0.5, 6.5), p(4.5, 5.0)]);

        let mut wrapped = vec![p(1.0, 1.0), p(2.0, 0.0), p(1.0, 1.0)];
        remove_collinear_vertices(&mut wrapped, f64::EPSILON);
        assert_eq!(wrapped, vec![p(1.0, 1.0), p(2.0, 0.0)]);
    }

    #[test]
    fn test_fully_collinear_loop_vanishes() {
        let mut v = vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)];
        remove_collinear_vertices(&mut v, f64::EPSILON);
        assert!(v.is_empty());
    }
}
