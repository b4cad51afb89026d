//! Range processing logic.
//!
//! This module contains the overlap check itself:
//! - [`normalize`] - Input values to ranges
//! - [`overlap`] - Sort and sweep detection
//! - [`report`] - Describing what two ranges share

pub mod normalize;
pub mod overlap;
pub mod report;

// Re-export public functions
pub use normalize::{cidr_range, integer_range, normalize_all, pair_range, Ranges};
pub use overlap::{check_overlap, find_overlap};
pub use report::{Conflict, ConflictKind};
