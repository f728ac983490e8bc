//! [`Area`]-related definitions.

use std::{iter::Sum, ops, str::FromStr};

use derive_more::Display;
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

/// Floor area in square meters.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Area(Decimal);

impl Area {
    /// [`Area`] of zero square meters.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Area`] by checking the provided value is
    /// nonnegative.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO).then_some(Self(val))
    }

    /// Returns the inner [`Decimal`] value of this [`Area`].
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Area {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid area value")
    }
}

impl ops::Add for Area {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Area {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Floor area in square meters, as a nonnegative decimal string.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Area = super::Area;

    impl Area {
        fn to_output<S: ScalarValue>(a: &Area) -> Value<S> {
            Value::scalar(a.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Area` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Area` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Area;

    #[test]
    fn validates_sign() {
        assert!(Area::from_str("120.5").is_ok());
        assert!(Area::from_str("0").is_ok());
        assert!(Area::from_str("-3").is_err());
    }

    #[test]
    fn sums() {
        let total: Area = ["120.5", "79.5"]
            .into_iter()
            .map(|s| Area::from_str(s).unwrap())
            .sum();
        assert_eq!(total, Area::from_str("200.0").unwrap());
    }
}
