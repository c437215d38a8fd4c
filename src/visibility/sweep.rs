//! Rotational sweep computing the visibility polygon.

use super::active::{ActiveSet, StrictWeakOrder};
use super::angle::AngleOrder;
use super::config::VisibilityConfig;
use super::event::{EventKind, SweepEvent};
use super::order::SegmentDistanceOrder;
use crate::bounds::Aabb2;
use crate::error::VisibilityError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Ray2, Segment2};
use crate::tolerance::{
    approx_equal, orientation, points_approx_equal, remove_collinear_vertices, Orientation,
};
use num_traits::Float;
use std::borrow::Borrow;
use tracing::{trace, warn};

/// Computes the visibility polygon of `observer` among segment obstacles.
///
/// Uses the default [`VisibilityConfig`]. See [`visibility_polygon_with`].
///
/// # Example
///
/// ```
/// use sightline::{visibility_polygon, Point2, Segment2};
///
/// // A wall to the right of the observer.
/// let wall = Segment2::new(Point2::new(5.0, 5.0), Point2::new(5.0, -5.0));
/// let vertices = visibility_polygon(Point2::origin(), [wall]);
///
/// assert_eq!(vertices, vec![Point2::new(5.0, 5.0), Point2::new(5.0, -5.0)]);
/// ```
pub fn visibility_polygon<F, I>(observer: Point2<F>, obstacles: I) -> Vec<Point2<F>>
where
    F: Float,
    I: IntoIterator,
    I::Item: Borrow<Segment2<F>>,
{
    visibility_polygon_with(observer, obstacles, &VisibilityConfig::default())
}

/// Computes the visibility polygon of `observer` among segment obstacles.
///
/// Returns the polygon vertices in clockwise order, starting from the `+y`
/// direction. The polygon is implicitly closed and free of collinear
/// vertices. Where nothing blocks the view, the polygon is bounded only by
/// obstacle endpoints; use [`bounded_visibility_polygon`] to close it off.
///
/// Obstacles may be given in any order and with either endpoint first.
/// Obstacles collinear with the observer are ignored. Obstacles must not
/// cross each other except at shared endpoints; otherwise the result is
/// unspecified.
///
/// # Panics
///
/// With debug assertions enabled, panics when the crossing precondition is
/// violated in a way the sweep detects. Release builds log a warning and skip
/// the affected vertices instead.
pub fn visibility_polygon_with<F, I>(
    observer: Point2<F>,
    obstacles: I,
    config: &VisibilityConfig<F>,
) -> Vec<Point2<F>>
where
    F: Float,
    I: IntoIterator,
    I::Item: Borrow<Segment2<F>>,
{
    let eps = config.epsilon;
    let by_distance = SegmentDistanceOrder::new(observer, eps);
    let mut active = ActiveSet::new(by_distance);
    let mut events = Vec::new();

    for obstacle in obstacles {
        let segment = *obstacle.borrow();

        match orientation(observer, segment.a, segment.b, eps) {
            Orientation::Collinear => continue,
            Orientation::RightTurn => {
                events.push(SweepEvent::start(segment));
                events.push(SweepEvent::end(segment.reversed()));
            }
            Orientation::LeftTurn => {
                events.push(SweepEvent::start(segment.reversed()));
                events.push(SweepEvent::end(segment));
            }
        }

        if crosses_upward_ray(observer, segment, eps) {
            active.insert(segment);
        }
    }

    let by_event = EventOrder {
        angle: AngleOrder::new(observer, eps),
    };
    events.sort_by(|x, y| by_event.compare(x, y));

    let mut vertices = Vec::with_capacity(events.len());
    for event in &events {
        if event.is_end() {
            active.remove(&event.segment);
        }

        match active.first() {
            None => vertices.push(event.point()),
            Some(nearest) if by_distance.less(&event.segment, nearest) => {
                match shadow_hit(observer, event.point(), nearest, eps) {
                    Some(hit) => match event.kind {
                        EventKind::Start => vertices.extend([hit, event.point()]),
                        EventKind::End => vertices.extend([event.point(), hit]),
                    },
                    None => {
                        if cfg!(debug_assertions) {
                            panic!(
                                "sweep ray missed the nearest active obstacle; \
                                 obstacles cross or are collinear with the observer"
                            );
                        }
                        warn!(
                            kind = ?event.kind,
                            "sweep ray missed the nearest active obstacle, skipping vertex pair"
                        );
                    }
                }
            }
            Some(_) => {}
        }

        if event.is_start() {
            active.insert(event.segment);
        }
    }

    let emitted = vertices.len();
    remove_collinear_vertices(&mut vertices, eps);
    trace!(
        events = events.len(),
        emitted,
        vertices = vertices.len(),
        "visibility sweep finished"
    );
    vertices
}

/// Computes the visibility polygon inside a rectangular scene.
///
/// The edges of `bounds` are added as obstacles, so every direction is
/// blocked and the result is a closed, clockwise, star-shaped polygon around
/// the observer. Obstacles must lie inside `bounds`.
///
/// # Errors
///
/// Returns [`VisibilityError::ObserverOutsideBounds`] unless the observer is
/// strictly inside `bounds`.
///
/// # Example
///
/// ```
/// use sightline::{bounded_visibility_polygon, Aabb2, Point2, Segment2, VisibilityConfig};
///
/// let room = Aabb2::new(Point2::<f64>::new(-10.0, -10.0), Point2::new(10.0, 10.0));
/// let pillar = Segment2::new(Point2::new(5.0, -2.0), Point2::new(5.0, 2.0));
///
/// let visible =
///     bounded_visibility_polygon(Point2::origin(), [pillar], room, &VisibilityConfig::default())
///         .unwrap();
///
/// assert!(visible.is_clockwise());
/// assert!((visible.area() - 370.0).abs() < 1e-9);
/// ```
pub fn bounded_visibility_polygon<F, I>(
    observer: Point2<F>,
    obstacles: I,
    bounds: Aabb2<F>,
    config: &VisibilityConfig<F>,
) -> Result<Polygon<F>, VisibilityError>
where
    F: Float,
    I: IntoIterator,
    I::Item: Borrow<Segment2<F>>,
{
    if !bounds.contains_point_strict(observer) {
        return Err(VisibilityError::ObserverOutsideBounds);
    }

    let scene = obstacles
        .into_iter()
        .map(|s| *s.borrow())
        .chain(bounds.edges());
    Ok(Polygon::new(visibility_polygon_with(observer, scene, config)))
}

/// Whether `segment` is already crossed by the ray going straight up from
/// `observer`, where the sweep begins.
fn crosses_upward_ray<F: Float>(observer: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    let (a, b) = if segment.a.x > segment.b.x {
        (segment.b, segment.a)
    } else {
        (segment.a, segment.b)
    };

    orientation(a, b, observer, eps) == Orientation::RightTurn
        && (approx_equal(b.x, observer.x, eps) || (a.x < observer.x && observer.x < b.x))
}

/// Where the ray from `observer` through `point` meets `nearest`.
///
/// A point shared with `nearest` is its own hit, without going through the
/// ray intersection.
fn shadow_hit<F: Float>(
    observer: Point2<F>,
    point: Point2<F>,
    nearest: &Segment2<F>,
    eps: F,
) -> Option<Point2<F>> {
    if points_approx_equal(point, nearest.a, eps) {
        return Some(nearest.a);
    }
    if points_approx_equal(point, nearest.b, eps) {
        return Some(nearest.b);
    }
    Ray2::from_points(observer, point).intersect_segment(nearest, eps)
}

/// Clockwise order of events; at a shared position, end events come first.
struct EventOrder<F> {
    angle: AngleOrder<F>,
}

impl<F: Float> StrictWeakOrder<SweepEvent<F>> for EventOrder<F> {
    fn less(&self, x: &SweepEvent<F>, y: &SweepEvent<F>) -> bool {
        if points_approx_equal(x.point(), y.point(), self.angle.epsilon) {
            return x.is_end() && y.is_start();
        }
        self.angle.less(&x.point(), &y.point())
    }
}
