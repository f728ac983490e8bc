//! Date range definitions.

use std::fmt;

use crate::{Date, Month};

/// Inclusive range of [`Date`]s.
///
/// Two [`Period`]s overlap when they share at least one common day.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Period {
    /// First day of this [`Period`].
    from: Date,

    /// Last day of this [`Period`].
    end: Date,
}

impl Period {
    /// Creates a new [`Period`] by checking `from <= end`.
    #[must_use]
    pub fn new(from: Date, end: Date) -> Option<Self> {
        (from <= end).then_some(Self { from, end })
    }

    /// Returns the first day of this [`Period`].
    #[must_use]
    pub fn from(&self) -> Date {
        self.from
    }

    /// Returns the last day of this [`Period`].
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Checks whether this [`Period`] and the `other` one share at
    /// least one common day.
    ///
    /// The single formula `a.from <= b.end && a.end >= b.from` subsumes
    /// all three containment cases (starts inside, ends inside, fully
    /// contains).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from <= other.end && self.end >= other.from
    }

    /// Checks whether this [`Period`] covers at least one day of the
    /// provided [`Month`].
    #[must_use]
    pub fn overlaps_month(&self, month: Month) -> bool {
        self.from <= month.last_day() && self.end >= month.first_day()
    }
}

impl From<Month> for Period {
    fn from(month: Month) -> Self {
        Self {
            from: month.first_day(),
            end: month.last_day(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { from, end } = self;
        write!(f, "{from}..={end}")
    }
}

#[cfg(test)]
mod spec {
    use crate::{Date, Month};

    use super::Period;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn period(from: &str, end: &str) -> Period {
        Period::new(date(from), date(end)).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(Period::new(date("2026-06-30"), date("2026-06-01")).is_none());
        assert!(Period::new(date("2026-06-01"), date("2026-06-01")).is_some());
    }

    #[test]
    fn overlap_is_symmetric_and_reflexive() {
        let cases = [
            (
                period("2026-01-01", "2026-12-31"),
                period("2026-06-01", "2026-06-30"),
            ),
            (
                period("2026-01-01", "2026-06-15"),
                period("2026-06-10", "2026-12-31"),
            ),
            (
                period("2026-01-01", "2026-03-31"),
                period("2026-04-01", "2026-06-30"),
            ),
            (
                period("2026-01-01", "2026-03-31"),
                period("2026-03-31", "2026-06-30"),
            ),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a} vs {b}");
            assert!(a.overlaps(&a), "{a} vs itself");
            assert!(b.overlaps(&b), "{b} vs itself");
        }
    }

    #[test]
    fn overlap_cases() {
        let existing = period("2026-01-01", "2026-12-31");

        // Starts inside, ends inside, fully contains, fully contained.
        assert!(existing.overlaps(&period("2026-06-01", "2027-06-30")));
        assert!(existing.overlaps(&period("2025-06-01", "2026-06-30")));
        assert!(existing.overlaps(&period("2025-01-01", "2027-12-31")));
        assert!(existing.overlaps(&period("2026-06-01", "2026-06-30")));

        // Disjoint ranges on both sides.
        assert!(!existing.overlaps(&period("2027-01-01", "2027-06-30")));
        assert!(!existing.overlaps(&period("2025-01-01", "2025-12-31")));

        // Touching boundaries share a day.
        assert!(existing.overlaps(&period("2026-12-31", "2027-06-30")));
    }

    #[test]
    fn month_overlap() {
        let term = period("2026-01-15", "2026-03-10");
        assert!(!term.overlaps_month(Month::new(2025, 12).unwrap()));
        assert!(term.overlaps_month(Month::new(2026, 1).unwrap()));
        assert!(term.overlaps_month(Month::new(2026, 2).unwrap()));
        assert!(term.overlaps_month(Month::new(2026, 3).unwrap()));
        assert!(!term.overlaps_month(Month::new(2026, 4).unwrap()));
    }
}
