//! Scene preparation and point-to-point visibility.

use super::config::VisibilityConfig;
use crate::error::VisibilityError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{points_approx_equal, segments_cross};
use num_traits::Float;
use tracing::debug;

/// Checks that obstacles satisfy the sweep's preconditions.
///
/// Every obstacle must have distinct endpoints, and no two obstacles may
/// touch anywhere other than a shared endpoint. The check is `O(n²)`.
///
/// # Errors
///
/// Reports the first degenerate obstacle found, or else the first crossing
/// pair in index order.
///
/// # Example
///
/// ```
/// use sightline::{validate_obstacles, Segment2, VisibilityConfig, VisibilityError};
///
/// let cfg = VisibilityConfig::default();
/// let cross = [
///     Segment2::from_coords(-1.0, 0.0, 1.0, 0.0),
///     Segment2::from_coords(0.0, -1.0, 0.0, 1.0),
/// ];
/// assert_eq!(
///     validate_obstacles(&cross, &cfg),
///     Err(VisibilityError::CrossingObstacles { first: 0, second: 1 })
/// );
/// ```
pub fn validate_obstacles<F: Float>(
    obstacles: &[Segment2<F>],
    config: &VisibilityConfig<F>,
) -> Result<(), VisibilityError> {
    let eps = config.epsilon;

    if let Some(index) = obstacles
        .iter()
        .position(|s| points_approx_equal(s.a, s.b, eps))
    {
        debug!(index, "degenerate obstacle");
        return Err(VisibilityError::DegenerateObstacle { index });
    }

    for (first, s) in obstacles.iter().enumerate() {
        for (offset, t) in obstacles[first + 1..].iter().enumerate() {
            if segments_cross(*s, *t, eps) {
                let second = first + 1 + offset;
                debug!(first, second, "crossing obstacles");
                return Err(VisibilityError::CrossingObstacles { first, second });
            }
        }
    }

    Ok(())
}

/// Flattens polygon outlines into obstacle segments.
///
/// Polygons with fewer than two vertices contribute nothing.
pub fn obstacles_from_polygons<'a, F, I>(polygons: I) -> Vec<Segment2<F>>
where
    F: Float + 'a,
    I: IntoIterator<Item = &'a Polygon<F>>,
{
    polygons.into_iter().flat_map(Polygon::edges).collect()
}

/// Returns `true` if `target` can be seen from `observer`.
///
/// The sight line is blocked by any obstacle it crosses or touches in its
/// interior; grazing an obstacle endpoint that coincides with `observer` or
/// `target` does not block it.
pub fn is_visible<F: Float>(
    observer: Point2<F>,
    target: Point2<F>,
    obstacles: &[Segment2<F>],
    config: &VisibilityConfig<F>,
) -> bool {
    let eps = config.epsilon;
    if points_approx_equal(observer, target, eps) {
        return true;
    }

    let sight = Segment2::new(observer, target);
    !obstacles
        .iter()
        .any(|obstacle| segments_cross(sight, *obstacle, eps))
}
