//! Describing a detected overlap.

use crate::error::OverlapError;
use crate::models::Range;

/// What the two colliding ranges share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// Exactly one element is covered twice.
    Point { value: String },
    /// The sub-range `from..=to` is covered twice.
    Range { from: String, to: String },
}

/// An overlap between two adjacent ranges of the sorted sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// Source of the range that starts first.
    pub first: String,
    /// Source of the range that starts inside `first`.
    pub second: String,
}

/// Build the conflict for `prev.upper >= curr.lower`.
///
/// The shared region runs from `curr.lower` to `prev.upper`.
pub fn describe<B: Ord>(prev: &Range<B>, curr: &Range<B>) -> Conflict {
    debug_assert!(prev.upper >= curr.lower, "ranges do not overlap");

    let kind = if prev.upper == curr.lower {
        ConflictKind::Point {
            value: curr.lower_label().to_string(),
        }
    } else {
        ConflictKind::Range {
            from: curr.lower_label().to_string(),
            to: prev.upper_label().to_string(),
        }
    };
    Conflict {
        kind,
        first: prev.source().to_string(),
        second: curr.source().to_string(),
    }
}

impl From<Conflict> for OverlapError {
    fn from(conflict: Conflict) -> Self {
        match conflict.kind {
            ConflictKind::Point { value } => OverlapError::SinglePointOverlap { value },
            ConflictKind::Range { from, to } => OverlapError::RangeOverlap { from, to },
        }
    }
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", OverlapError::from(self.clone()))
    }
}
