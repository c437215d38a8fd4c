//! Visibility polygons by rotational sweep.
//!
//! Given an observer and a set of line-segment obstacles, the sweep turns a
//! ray clockwise around the observer, starting straight up. It keeps the
//! obstacles the ray currently crosses in an [`ActiveSet`] ordered by
//! [`SegmentDistanceOrder`], and emits a vertex whenever the nearest obstacle
//! changes. The whole query runs in `O(n log n)` comparisons plus `O(n)` per
//! active-set update.
//!
//! # Example
//!
//! ```
//! use sightline::visibility::{is_visible, visibility_polygon, VisibilityConfig};
//! use sightline::{Point2, Segment2};
//!
//! let observer = Point2::new(0.0, 0.0);
//! let near = Segment2::from_coords(2.0, 3.0, 2.0, -1.0);
//! let far = Segment2::from_coords(6.0, 6.0, 6.0, -6.0);
//!
//! let vertices = visibility_polygon(observer, [near, far]);
//! assert_eq!(vertices.len(), 4);
//! assert_eq!(vertices[0], Point2::new(2.0, 3.0));
//!
//! let cfg = VisibilityConfig::default();
//! assert!(!is_visible(observer, Point2::new(6.0, 0.0), &[near, far], &cfg));
//! ```

mod active;
mod angle;
mod config;
mod event;
mod order;
mod query;
mod sweep;

pub use active::{ActiveSet, StrictWeakOrder};
pub use angle::AngleOrder;
pub use config::VisibilityConfig;
pub use event::{EventKind, SweepEvent};
pub use order::SegmentDistanceOrder;
pub use query::{is_visible, obstacles_from_polygons, validate_obstacles};
pub use sweep::{bounded_visibility_polygon, visibility_polygon, visibility_polygon_with};
