//! Detect overlapping CIDR blocks, integers or integer ranges.
//!
//! Every check sorts the ranges by lower bound and compares neighbours. The
//! first overlap found is reported either as one shared element or as the
//! shared sub-range.
//!
//! ```
//! use range_overlap::{check_cidrs, OverlapError};
//!
//! assert!(check_cidrs(&["10.0.0.0/24", "10.0.1.0/24"]).is_ok());
//! assert_eq!(
//!     check_cidrs(&["192.168.1.0/24", "192.168.2.0/16"]).unwrap_err(),
//!     OverlapError::RangeOverlap {
//!         from: "192.168.1.0".to_string(),
//!         to: "192.168.255.255".to_string(),
//!     }
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{OverlapError, Result};
pub use models::{Range, RangeInput, RangeSet};
pub use processing::{Conflict, ConflictKind};

use processing::{check_overlap, cidr_range, integer_range, normalize_all, pair_range};
use serde_json::Value;

/// Check CIDR blocks and bare addresses (taken as `/32`).
pub fn check_cidrs<S: AsRef<str>>(values: &[S]) -> Result<()> {
    if values.len() < 2 {
        return Ok(());
    }
    let ranges = values
        .iter()
        .map(|v| cidr_range(v.as_ref()))
        .collect::<Result<RangeSet<_>>>()?;
    check_overlap(ranges)
}

/// Check integers, each a single point range.
pub fn check_integers(values: &[i64]) -> Result<()> {
    check_overlap(values.iter().map(|&n| integer_range(n)).collect())
}

/// Check explicit inclusive `(from, to)` ranges.
pub fn check_pairs(values: &[(i64, i64)]) -> Result<()> {
    if values.len() < 2 {
        return Ok(());
    }
    let ranges = values
        .iter()
        .map(|&(from, to)| pair_range(from, to))
        .collect::<Result<RangeSet<_>>>()?;
    check_overlap(ranges)
}

/// Check inputs of any supported shape, all from one domain.
pub fn check_inputs(values: &[RangeInput]) -> Result<()> {
    match find_conflict(values)? {
        Some(conflict) => Err(conflict.into()),
        None => Ok(()),
    }
}

/// Like [`check_inputs`] but hands back the conflict with both sources.
pub fn find_conflict(values: &[RangeInput]) -> Result<Option<Conflict>> {
    if values.len() < 2 {
        return Ok(None);
    }
    normalize_all(values)?.find_overlap()
}

/// Check a JSON list of strings, integers or `{"from", "to"}` objects.
///
/// Element shapes are validated before the size shortcut, so `[true]` fails
/// with [`OverlapError::UnsupportedType`].
pub fn check_json(value: &Value) -> Result<()> {
    let inputs = RangeInput::from_json_list(value)?;
    check_inputs(&inputs)
}
