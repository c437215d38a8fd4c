//! Polygon type and basic queries.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed: the last vertex connects to the first,
/// and the first vertex is not repeated. Visibility polygons are produced in
/// clockwise order, so their signed area is negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns true if the vertices wind clockwise with non-zero area.
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < F::zero()
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// Returns the closed loop of edges, each oriented from a vertex to its
    /// successor.
    ///
    /// Polygons with fewer than two vertices have no edges.
    pub fn edges(&self) -> Vec<Segment2<F>> {
        let n = self.vertices.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    let n = vertices.len();
    if n < 3 {
        return F::zero();
    }

    let twice = (0..n).fold(F::zero(), |acc, i| {
        let j = (i + 1) % n;
        acc + vertices[i].to_vec().cross(vertices[j].to_vec())
    });

    twice / (F::one() + F::one())
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn clockwise_square() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
        ])
    }

    #[test]
    fn test_signed_area_winding() {
        let cw = clockwise_square();
        assert_relative_eq!(cw.signed_area(), -100.0, epsilon = 1e-12);
        assert!(cw.is_clockwise());

        let mut ccw = cw.clone();
        ccw.vertices.reverse();
        assert_relative_eq!(ccw.signed_area(), 100.0, epsilon = 1e-12);
        assert!(!ccw.is_clockwise());
        assert_relative_eq!(ccw.area(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_area() {
        let two: Polygon<f64> = Polygon::new(vec![Point2::new(5.0, 5.0), Point2::new(5.0, -5.0)]);
        assert_eq!(two.signed_area(), 0.0);
        assert!(!two.is_clockwise());
    }

    #[test]
    fn test_contains() {
        let sq = clockwise_square();
        assert!(sq.contains(Point2::new(5.0, 5.0)));
        assert!(!sq.contains(Point2::new(15.0, 5.0)));
        assert!(!Polygon::<f64>::empty().contains(Point2::origin()));
    }

    #[test]
    fn test_edges_close_the_loop() {
        let sq = clockwise_square();
        let edges = sq.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], Segment2::new(Point2::new(0.0, 0.0), Point2::new(0.0, 10.0)));

        let single: Polygon<f64> = Polygon::new(vec![Point2::origin()]);
        assert!(single.edges().is_empty());
    }

    #[test]
    fn test_bounding_box() {
        let bb = clockwise_square().bounding_box().unwrap();
        assert_eq!(bb.min, Point2::new(0.0, 0.0));
        assert_eq!(bb.max, Point2::new(10.0, 10.0));
        assert!(Polygon::<f64>::empty().bounding_box().is_none());
    }
}
