//! Turning input values into comparable ranges.

use super::overlap::find_overlap;
use super::report::Conflict;
use crate::error::{OverlapError, Result};
use crate::models::{Ipv4, Range, RangeInput, RangeSet};
use std::borrow::Cow;
use std::net::Ipv4Addr;

/// Range covered by a CIDR block. A bare address is taken as a `/32`.
pub fn cidr_range(value: &str) -> Result<Range<Ipv4Addr>> {
    let value = value.trim();
    // Anything with a '/' in the wrong place is already malformed and fails to parse.
    let cidr: Cow<str> = if value.contains('/') {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{value}/32"))
    };
    let block: Ipv4 = cidr.parse()?;
    let (lower, upper) = block.bounds()?;
    log::trace!("{value} -> {lower}..{upper}");
    Ok(Range::new(lower, upper).with_source(value))
}

/// Single point range `(n, n)`.
pub fn integer_range(value: i64) -> Range<i64> {
    Range::new(value, value)
}

/// Explicit `(from, to)` range, never reordered.
pub fn pair_range(from: i64, to: i64) -> Result<Range<i64>> {
    if from > to {
        return Err(OverlapError::MalformedRange {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(Range::new(from, to))
}

/// Ranges of one check, all from the same bound domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ranges {
    Addresses(RangeSet<Ipv4Addr>),
    Integers(RangeSet<i64>),
}

impl Ranges {
    pub fn len(&self) -> usize {
        match self {
            Ranges::Addresses(set) => set.len(),
            Ranges::Integers(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run the sweep over whichever domain this is.
    pub fn find_overlap(&mut self) -> Result<Option<Conflict>> {
        match self {
            Ranges::Addresses(set) => find_overlap(set),
            Ranges::Integers(set) => find_overlap(set),
        }
    }
}

/// Normalise every input, stopping at the first malformed one.
///
/// Address and integer inputs cannot be compared with each other, so a mix
/// fails with [`OverlapError::UnsupportedType`].
pub fn normalize_all(inputs: &[RangeInput]) -> Result<Ranges> {
    let Some(first) = inputs.first() else {
        return Ok(Ranges::Integers(RangeSet::new()));
    };
    if let Some(odd) = inputs.iter().find(|i| i.is_address() != first.is_address()) {
        return Err(OverlapError::unsupported(format!(
            "{odd:?} mixed with {first:?}"
        )));
    }

    if first.is_address() {
        let mut set = RangeSet::new();
        for input in inputs {
            if let RangeInput::Cidr(s) = input {
                set.push(cidr_range(s)?);
            }
        }
        Ok(Ranges::Addresses(set))
    } else {
        let mut set = RangeSet::new();
        for input in inputs {
            match input {
                RangeInput::Integer(n) => set.push(integer_range(*n)),
                RangeInput::Pair { from, to } => set.push(pair_range(*from, *to)?),
                RangeInput::Cidr(_) => {}
            }
        }
        Ok(Ranges::Integers(set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_range() {
        let r = cidr_range("192.168.2.10/24").unwrap();
        assert_eq!(r.lower_label(), "192.168.2.0");
        assert_eq!(r.upper_label(), "192.168.2.255");
        assert_eq!(r.source(), "192.168.2.10/24");

        let r = cidr_range("192.168.2.10/16").unwrap();
        assert_eq!(r.lower, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(r.upper, Ipv4Addr::new(192, 168, 255, 255));

        let r = cidr_range("192.168.86.42/17").unwrap();
        assert_eq!(r.lower, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(r.upper, Ipv4Addr::new(192, 168, 127, 255));

        let r = cidr_range("192.0.0.0/8").unwrap();
        assert_eq!(r.upper, Ipv4Addr::new(192, 255, 255, 255));
    }

    #[test]
    fn test_cidr_range_single_host() {
        let bare = cidr_range(" 192.168.2.42 ").unwrap();
        let explicit = cidr_range("192.168.2.42/32").unwrap();
        assert!(bare.is_single());
        assert_eq!(bare.lower, explicit.lower);
        assert_eq!(bare.upper, explicit.upper);
        assert_eq!(bare.source(), "192.168.2.42");
    }

    #[test]
    fn test_cidr_range_errors() {
        assert!(matches!(
            cidr_range("999.1.1.1/24"),
            Err(OverlapError::InvalidCidr { .. })
        ));
        assert!(matches!(
            cidr_range("10.0.0.0/8/8"),
            Err(OverlapError::InvalidCidr { .. })
        ));
        assert!(matches!(
            cidr_range("fe80::1"),
            Err(OverlapError::NotIpv4 { .. })
        ));
        assert!(matches!(
            cidr_range("10.0.0.0/40"),
            Err(OverlapError::InvalidMask { .. })
        ));
    }

    #[test]
    fn test_pair_range() {
        let r = pair_range(1, 5).unwrap();
        assert_eq!((r.lower, r.upper), (1, 5));
        assert_eq!(r.source(), "1..5");
        assert_eq!(
            pair_range(5, 1).unwrap_err(),
            OverlapError::MalformedRange {
                from: "5".to_string(),
                to: "1".to_string()
            }
        );
    }

    #[test]
    fn test_normalize_all_integers_and_pairs() {
        let inputs = vec![RangeInput::from(3i64), RangeInput::from((5i64, 9i64))];
        match normalize_all(&inputs).unwrap() {
            Ranges::Integers(set) => assert_eq!(set.len(), 2),
            other => panic!("expected integers, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_all_rejects_mix() {
        let inputs = vec![RangeInput::from("10.0.0.0/8"), RangeInput::from(3i64)];
        assert!(matches!(
            normalize_all(&inputs),
            Err(OverlapError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_normalize_all_empty() {
        assert!(normalize_all(&[]).unwrap().is_empty());
    }
}
