use std::{
    fmt::{Debug, Formatter},
    ops::Sub,
};

use chrono::{DateTime, Local};

pub type Interval<Tz = Local> = RangeExclusive<DateTime<Tz>>;

/// Half-open range: `start` is inclusive, `end` is exclusive.
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct RangeExclusive<T: Copy> {
    pub start: T,
    pub end: T,
}

impl<T: Copy + Debug> Debug for RangeExclusive<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl<T: Copy> RangeExclusive<T> {
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    pub const fn with_end(mut self, end: T) -> Self {
        self.end = end;
        self
    }
}

impl<T: Copy + Sub> RangeExclusive<T> {
    #[must_use]
    pub fn len(self) -> <T as Sub>::Output {
        self.end - self.start
    }
}

impl<T: Copy + PartialOrd> RangeExclusive<T> {
    #[must_use]
    pub fn contains(self, other: T) -> bool {
        (self.start <= other) && (other < self.end)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Common part of the two ranges, or [`None`] if they do not overlap.
    pub fn intersect(self, other: Self) -> Option<Self> {
        let start = if other.start > self.start { other.start } else { self.start };
        let end = if other.end < self.end { other.end } else { self.end };
        let intersection = Self { start, end };
        (!intersection.is_empty()).then_some(intersection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let range = RangeExclusive::new(1, 3);
        assert!(!range.contains(0));
        assert!(range.contains(1));
        assert!(range.contains(2));
        assert!(!range.contains(3));
    }

    #[test]
    fn test_intersect() {
        let range = RangeExclusive::new(10, 20);
        assert_eq!(range.intersect(RangeExclusive::new(15, 30)), Some(RangeExclusive::new(15, 20)));
        assert_eq!(range.intersect(RangeExclusive::new(0, 12)), Some(RangeExclusive::new(10, 12)));
        assert_eq!(range.intersect(RangeExclusive::new(12, 14)), Some(RangeExclusive::new(12, 14)));
        assert_eq!(range.intersect(RangeExclusive::new(20, 30)), None);
        assert_eq!(range.intersect(RangeExclusive::new(0, 10)), None);
    }

    #[test]
    fn test_len() {
        assert_eq!(RangeExclusive::new(3, 10).len(), 7);
    }
}
