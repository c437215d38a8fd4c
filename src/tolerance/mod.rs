//! Epsilon-aware comparisons and geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod cleanup;
mod compare;
mod predicates;

pub use cleanup::remove_collinear_vertices;
pub use compare::{approx_equal, points_approx_equal, strictly_less};
pub use predicates::{orientation, segments_cross, Orientation};
