//! Tolerance configuration for visibility queries.

use num_traits::Float;

/// Parameters threaded through every comparison of a visibility query.
///
/// `epsilon` is a *relative* tolerance: two values are treated as equal when
/// they differ by at most `epsilon` times the larger magnitude. The default is
/// the machine epsilon of `F`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig<F> {
    /// Relative tolerance for all floating point comparisons.
    pub epsilon: F,
}

impl<F: Float> VisibilityConfig<F> {
    /// Creates a configuration with the given relative tolerance.
    #[inline]
    pub fn new(epsilon: F) -> Self {
        Self { epsilon }
    }

    /// Returns a copy with a different relative tolerance.
    #[inline]
    pub fn with_epsilon(self, epsilon: F) -> Self {
        Self { epsilon }
    }
}

impl<F: Float> Default for VisibilityConfig<F> {
    fn default() -> Self {
        Self::new(F::epsilon())
    }
}
