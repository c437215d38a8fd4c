//! sightline - Visibility polygons among segment obstacles
//!
//! Stand somewhere, look all the way around, and record what you can see. This
//! library computes that region with a rotational sweep over line-segment
//! obstacles, using tolerance-aware predicates throughout.

pub mod bounds;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;
pub mod visibility;

pub use bounds::Aabb2;
pub use error::VisibilityError;
pub use polygon::Polygon;
pub use primitives::{Point2, Ray2, Segment2, Vec2};
pub use tolerance::{orientation, Orientation};
pub use visibility::{
    bounded_visibility_polygon, is_visible, obstacles_from_polygons, validate_obstacles,
    visibility_polygon, visibility_polygon_with, VisibilityConfig,
};
