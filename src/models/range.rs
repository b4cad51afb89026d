//! Inclusive ranges over any totally ordered bound.

use std::fmt::Display;

/// An inclusive `(lower, upper)` range with display labels for both bounds.
///
/// Construction does not check `lower <= upper`; the overlap sweep does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range<B> {
    pub lower: B,
    pub upper: B,
    lower_label: String,
    upper_label: String,
    source: String,
}

impl<B: Display> Range<B> {
    /// Range with labels taken from the bounds' `Display`.
    pub fn new(lower: B, upper: B) -> Self {
        let lower_label = lower.to_string();
        let upper_label = upper.to_string();
        Self::labelled(lower, upper, lower_label, upper_label)
    }
}

impl<B> Range<B> {
    /// Range with caller supplied labels.
    pub fn labelled(
        lower: B,
        upper: B,
        lower_label: impl Into<String>,
        upper_label: impl Into<String>,
    ) -> Self {
        let lower_label = lower_label.into();
        let upper_label = upper_label.into();
        let source = if lower_label == upper_label {
            lower_label.clone()
        } else {
            format!("{lower_label}..{upper_label}")
        };
        Range {
            lower,
            upper,
            lower_label,
            upper_label,
            source,
        }
    }

    /// Replace the text the range was parsed from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn lower_label(&self) -> &str {
        &self.lower_label
    }

    pub fn upper_label(&self) -> &str {
        &self.upper_label
    }

    /// The input this range came from, e.g. `192.168.1.0/24`.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl<B: Ord> Range<B> {
    pub fn is_well_formed(&self) -> bool {
        self.lower <= self.upper
    }

    pub fn is_single(&self) -> bool {
        self.lower == self.upper
    }

    pub fn contains(&self, value: &B) -> bool {
        &self.lower <= value && value <= &self.upper
    }
}

/// The ranges of one check, owned by that check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSet<B> {
    ranges: Vec<Range<B>>,
}

impl<B> Default for RangeSet<B> {
    fn default() -> Self {
        RangeSet { ranges: Vec::new() }
    }
}

impl<B> RangeSet<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, range: Range<B>) {
        self.ranges.push(range);
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range<B>> {
        self.ranges.iter()
    }
}

impl<B: Ord> RangeSet<B> {
    /// Stable sort by lower bound, equal lower bounds by upper bound.
    pub fn sort_by_lower(&mut self) {
        self.ranges.sort_by(|a, b| {
            a.lower
                .cmp(&b.lower)
                .then_with(|| a.upper.cmp(&b.upper))
        });
    }
}

impl<B> FromIterator<Range<B>> for RangeSet<B> {
    fn from_iter<I: IntoIterator<Item = Range<B>>>(iter: I) -> Self {
        RangeSet {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl<B> From<Vec<Range<B>>> for RangeSet<B> {
    fn from(ranges: Vec<Range<B>>) -> Self {
        RangeSet { ranges }
    }
}

impl<'a, B> IntoIterator for &'a RangeSet<B> {
    type Item = &'a Range<B>;
    type IntoIter = std::slice::Iter<'a, Range<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_range_labels() {
        let r = Range::new(Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 0, 0, 255));
        assert_eq!(r.lower_label(), "10.0.0.0");
        assert_eq!(r.upper_label(), "10.0.0.255");
        assert_eq!(r.source(), "10.0.0.0..10.0.0.255");

        let r = Range::new(7i64, 7).with_source("seven");
        assert_eq!(r.lower_label(), "7");
        assert_eq!(r.source(), "seven");
        assert!(r.is_single());
    }

    #[test]
    fn test_range_well_formed() {
        assert!(Range::new(1i64, 5).is_well_formed());
        assert!(Range::new(5i64, 5).is_well_formed());
        assert!(!Range::new(6i64, 5).is_well_formed());
    }

    #[test]
    fn test_range_contains() {
        let r = Range::new(1i64, 5);
        assert!(r.contains(&1));
        assert!(r.contains(&5));
        assert!(!r.contains(&6));
    }

    #[test]
    fn test_sort_is_numeric() {
        let mut set: RangeSet<i64> = [10i64, 9, 100, 2]
            .into_iter()
            .map(|n| Range::new(n, n))
            .collect();
        set.sort_by_lower();
        let lowers: Vec<i64> = set.iter().map(|r| r.lower).collect();
        assert_eq!(lowers, vec![2, 9, 10, 100]);
    }

    #[test]
    fn test_sort_ties_by_upper() {
        let mut set = RangeSet::from(vec![Range::new(1i64, 5), Range::new(1, 3)]);
        set.sort_by_lower();
        let uppers: Vec<i64> = set.iter().map(|r| r.upper).collect();
        assert_eq!(uppers, vec![3, 5]);
    }

    #[test]
    fn test_sort_addresses_by_octets() {
        let mut set = RangeSet::new();
        set.push(Range::new(Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 255, 255, 255)));
        set.push(Range::new(Ipv4Addr::new(9, 0, 0, 0), Ipv4Addr::new(9, 255, 255, 255)));
        set.sort_by_lower();
        assert_eq!(set.iter().next().unwrap().lower_label(), "9.0.0.0");
        assert_eq!(set.len(), 2);
    }
}
