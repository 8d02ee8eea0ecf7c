//! The closed integer interval and its ordering.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An interval from [`low`, `high`].
///
/// Nothing stops `low` from exceeding `high`.  Such intervals are accepted by
/// [`crate::Intervals`] and simply produce odd looking gaps and graphs, so
/// callers that care should reject them before adding.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// The low bound of the interval (inclusive).
    pub low: i64,

    /// The high bound of the interval (inclusive).
    pub high: i64,
}

impl Interval {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Returns true if `value` lies within [`low`, `high`].
    pub fn contains(&self, value: i64) -> bool {
        in_between_inclusive(value, self.low, self.high)
    }

    /// Orders intervals by their low bound only.
    ///
    /// Two intervals with the same low bound compare equal regardless of
    /// their high bound.
    pub fn by_low(a: &Self, b: &Self) -> Ordering {
        a.low.cmp(&b.low)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

pub(crate) fn in_between_inclusive(value: i64, low: i64, high: i64) -> bool {
    low <= value && value <= high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn contains_is_inclusive() {
        let interval = Interval::new(3, 7);
        assert!(interval.contains(3));
        assert!(interval.contains(5));
        assert!(interval.contains(7));
        assert!(!interval.contains(2));
        assert!(!interval.contains(8));
    }

    #[test]
    pub fn inverted_interval_contains_nothing() {
        let interval = Interval::new(7, 3);
        assert!(!interval.contains(3));
        assert!(!interval.contains(5));
        assert!(!interval.contains(7));
    }

    #[test]
    pub fn by_low_ignores_high() {
        assert_eq!(
            Interval::by_low(&Interval::new(1, 9), &Interval::new(2, 3)),
            Ordering::Less
        );
        assert_eq!(
            Interval::by_low(&Interval::new(4, 9), &Interval::new(4, 5)),
            Ordering::Equal
        );
        assert_eq!(
            Interval::by_low(&Interval::new(-1, 0), &Interval::new(-5, 100)),
            Ordering::Greater
        );
    }

    #[test]
    pub fn display() {
        assert_eq!(Interval::new(5, 10).to_string(), "[5,10]");
        assert_eq!(Interval::new(-3, -1).to_string(), "[-3,-1]");
    }

    #[test]
    pub fn serde_field_names() {
        let json = serde_json::to_string(&Interval::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"low":1,"high":2}"#);
        let interval: Interval = serde_json::from_str(r#"{"low":-4,"high":8}"#).unwrap();
        assert_eq!(interval, Interval::new(-4, 8));
    }
}
