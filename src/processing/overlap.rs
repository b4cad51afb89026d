//! Overlap detection by sort and sweep.
//!
//! After sorting by lower bound, a set with no overlapping neighbours has no
//! overlapping pair at all: for `i < j < k`,
//! `r[i].upper < r[j].lower <= r[j].upper < r[k].lower`.

use super::report::{describe, Conflict};
use crate::error::{OverlapError, Result};
use crate::models::RangeSet;
use itertools::Itertools;

/// Find the first overlap of the sorted sweep, if any.
///
/// Sorts `ranges` in place. Fails with [`OverlapError::MalformedRange`] when a
/// range has `lower > upper`.
pub fn find_overlap<B: Ord>(ranges: &mut RangeSet<B>) -> Result<Option<Conflict>> {
    if ranges.len() < 2 {
        return Ok(None);
    }
    if let Some(bad) = ranges.iter().find(|r| !r.is_well_formed()) {
        return Err(OverlapError::MalformedRange {
            from: bad.lower_label().to_string(),
            to: bad.upper_label().to_string(),
        });
    }

    ranges.sort_by_lower();
    log::trace!("sweeping {} sorted ranges", ranges.len());

    let conflict = ranges
        .iter()
        .tuple_windows()
        .find(|(prev, curr)| prev.upper >= curr.lower)
        .map(|(prev, curr)| describe(prev, curr));

    if let Some(conflict) = &conflict {
        log::debug!(
            "overlap between {} and {}: {}",
            conflict.first,
            conflict.second,
            conflict
        );
    }
    Ok(conflict)
}

/// Succeed when no two ranges share an element.
pub fn check_overlap<B: Ord>(mut ranges: RangeSet<B>) -> Result<()> {
    match find_overlap(&mut ranges)? {
        Some(conflict) => Err(conflict.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Range;
    use crate::processing::ConflictKind;

    fn points(values: &[i64]) -> RangeSet<i64> {
        values.iter().map(|&n| Range::new(n, n)).collect()
    }

    fn pairs(values: &[(i64, i64)]) -> RangeSet<i64> {
        values.iter().map(|&(a, b)| Range::new(a, b)).collect()
    }

    #[test]
    fn test_fewer_than_two() {
        assert!(check_overlap(points(&[])).is_ok());
        assert!(check_overlap(points(&[1])).is_ok());
        // a lone malformed range is not checked
        assert!(check_overlap(pairs(&[(5, 1)])).is_ok());
    }

    #[test]
    fn test_disjoint() {
        assert!(check_overlap(points(&[1, 2, 3, 4])).is_ok());
        assert!(check_overlap(pairs(&[(1, 5), (6, 10), (11, 11)])).is_ok());
    }

    #[test]
    fn test_point_overlap() {
        assert_eq!(
            check_overlap(points(&[1, 1, 3, 4])).unwrap_err(),
            OverlapError::SinglePointOverlap {
                value: "1".to_string()
            }
        );
        assert_eq!(
            check_overlap(points(&[4, 3, 3, 1])).unwrap_err(),
            OverlapError::SinglePointOverlap {
                value: "3".to_string()
            }
        );
    }

    #[test]
    fn test_range_overlap() {
        assert_eq!(
            check_overlap(pairs(&[(6, 12), (1, 8)])).unwrap_err(),
            OverlapError::RangeOverlap {
                from: "6".to_string(),
                to: "8".to_string()
            }
        );
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        // "10" < "9" as strings would report a bogus overlap or miss one
        assert!(check_overlap(points(&[10, 9, 100])).is_ok());
        assert_eq!(
            check_overlap(pairs(&[(10, 11), (9, 10)])).unwrap_err(),
            OverlapError::SinglePointOverlap {
                value: "10".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_range() {
        assert_eq!(
            check_overlap(pairs(&[(1, 2), (9, 3)])).unwrap_err(),
            OverlapError::MalformedRange {
                from: "9".to_string(),
                to: "3".to_string()
            }
        );
    }

    #[test]
    fn test_first_overlap_reported() {
        let mut set = pairs(&[(30, 40), (1, 10), (35, 50), (10, 20)]);
        let conflict = find_overlap(&mut set).unwrap().unwrap();
        assert_eq!(
            conflict.kind,
            ConflictKind::Point {
                value: "10".to_string()
            }
        );
        assert_eq!(conflict.first, "1..10");
        assert_eq!(conflict.second, "10..20");
    }

    #[test]
    fn test_tie_on_lower_is_order_independent() {
        for input in [[(1, 5), (1, 3)], [(1, 3), (1, 5)]] {
            assert_eq!(
                check_overlap(pairs(&input)).unwrap_err(),
                OverlapError::RangeOverlap {
                    from: "1".to_string(),
                    to: "3".to_string()
                }
            );
        }
    }
}
