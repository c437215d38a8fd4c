//! Sweep events.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Whether an obstacle enters or leaves the sweep ray at an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The obstacle starts being crossed by the sweep ray.
    Start,
    /// The obstacle stops being crossed by the sweep ray.
    End,
}

/// An angular position at which an obstacle starts or stops being active.
///
/// The segment is oriented so that its first endpoint is the event position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepEvent<F> {
    /// Start or end.
    pub kind: EventKind,
    /// The obstacle, with `segment.a` at the event position.
    pub segment: Segment2<F>,
}

impl<F: Float> SweepEvent<F> {
    /// Creates a start event at `segment.a`.
    #[inline]
    pub fn start(segment: Segment2<F>) -> Self {
        Self {
            kind: EventKind::Start,
            segment,
        }
    }

    /// Creates an end event at `segment.a`.
    #[inline]
    pub fn end(segment: Segment2<F>) -> Self {
        Self {
            kind: EventKind::End,
            segment,
        }
    }

    /// The event position.
    #[inline]
    pub fn point(&self) -> Point2<F> {
        self.segment.a
    }

    /// Returns `true` for a start event.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind == EventKind::Start
    }

    /// Returns `true` for an end event.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == EventKind::End
    }
}
