//! Polygon container and area/containment queries.
//!
//! Visibility results are returned as [`Polygon`]s; obstacle outlines given as
//! polygons are turned into segments with [`Polygon::edges`].
//!
//! # Example
//!
//! ```
//! use sightline::polygon::Polygon;
//! use sightline::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 0.0),
//! ]);
//!
//! assert!(square.is_clockwise());
//! assert_eq!(square.area(), 4.0);
//! assert_eq!(square.edges().len(), 4);
//! ```

mod core;

pub use core::{polygon_contains, polygon_signed_area, Polygon};
