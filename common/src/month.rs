//! [`Month`]-related definitions.

use std::{fmt, str::FromStr};

use crate::Date;

/// Calendar month of a specific year, the period all financial reports
/// are computed over.
///
/// Constructible only from a valid month number (`1..=12`) and a
/// plausible year (`2000..=2100`), so out-of-range report parameters
/// are rejected before any store access.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Month {
    /// Year of this [`Month`].
    year: i32,

    /// Month number, `1..=12`.
    month: u8,
}

impl Month {
    /// Earliest year a [`Month`] may refer to.
    pub const MIN_YEAR: i32 = 2000;

    /// Latest year a [`Month`] may refer to.
    pub const MAX_YEAR: i32 = 2100;

    /// Creates a new [`Month`] by checking the provided values are in
    /// range.
    #[must_use]
    pub fn new(year: i32, month: u8) -> Option<Self> {
        ((1..=12).contains(&month)
            && (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year))
        .then_some(Self { year, month })
    }

    /// Returns the year of this [`Month`].
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (`1..=12`) of this [`Month`].
    #[must_use]
    pub fn number(&self) -> u8 {
        self.month
    }

    /// Returns the first day of this [`Month`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn first_day(&self) -> Date {
        Date::from_calendar(self.year, self.month, 1).expect("valid month")
    }

    /// Returns the last day of this [`Month`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn last_day(&self) -> Date {
        let days = time::util::days_in_year_month(
            self.year,
            time::Month::try_from(self.month).expect("valid month"),
        );
        Date::from_calendar(self.year, self.month, days).expect("valid month")
    }

    /// Checks whether the provided [`Date`] falls into this [`Month`].
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) =
            s.split_once('-').ok_or("expected `YYYY-MM` format")?;
        let year = year.parse().map_err(|_| "invalid year")?;
        let month = month.parse().map_err(|_| "invalid month")?;
        Self::new(year, month).ok_or("month out of range")
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Calendar month in `YYYY-MM` format, with the year in
    /// `2000..=2100`.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Month = super::Month;

    impl Month {
        fn to_output<S: ScalarValue>(m: &Month) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Month` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Month` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use crate::Date;

    use super::Month;

    #[test]
    fn validates_range() {
        assert!(Month::new(2026, 1).is_some());
        assert!(Month::new(2026, 12).is_some());
        assert!(Month::new(2026, 0).is_none());
        assert!(Month::new(2026, 13).is_none());
        assert!(Month::new(1999, 6).is_none());
        assert!(Month::new(2101, 6).is_none());
    }

    #[test]
    fn day_bounds() {
        let feb = Month::new(2026, 2).unwrap();
        assert_eq!(feb.first_day(), Date::from_calendar(2026, 2, 1).unwrap());
        assert_eq!(feb.last_day(), Date::from_calendar(2026, 2, 28).unwrap());

        let leap = Month::new(2028, 2).unwrap();
        assert_eq!(leap.last_day(), Date::from_calendar(2028, 2, 29).unwrap());
    }

    #[test]
    fn contains_only_own_days() {
        let jan = Month::new(2026, 1).unwrap();
        assert!(jan.contains(Date::from_calendar(2026, 1, 10).unwrap()));
        assert!(!jan.contains(Date::from_calendar(2026, 2, 1).unwrap()));
        assert!(!jan.contains(Date::from_calendar(2025, 1, 10).unwrap()));
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Month::from_str("2026-01").unwrap(),
            Month::new(2026, 1).unwrap(),
        );
        assert!(Month::from_str("2026").is_err());
        assert!(Month::from_str("2026-00").is_err());
        assert!(Month::from_str("1980-05").is_err());
    }
}
