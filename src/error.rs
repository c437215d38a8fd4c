//! Error types for visibility queries.

use thiserror::Error;

/// Errors reported by the checked visibility entry points.
///
/// The core sweep never fails; these come from the bounded variant and from
/// obstacle validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisibilityError {
    /// The observer is on or outside the scene bounds.
    #[error("observer is not strictly inside the scene bounds")]
    ObserverOutsideBounds,

    /// Two obstacles touch somewhere other than a shared endpoint.
    #[error("obstacles {first} and {second} cross")]
    CrossingObstacles {
        /// Index of the first offending obstacle.
        first: usize,
        /// Index of the second offending obstacle.
        second: usize,
    },

    /// An obstacle has (approximately) coincident endpoints.
    #[error("obstacle {index} has zero length")]
    DegenerateObstacle {
        /// Index of the offending obstacle.
        index: usize,
    },
}
