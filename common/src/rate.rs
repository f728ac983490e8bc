//! [`Rate`]-related definitions.

use std::{ops, str::FromStr};

use derive_more::Display;
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

use crate::Money;

/// Fractional multiplier in the `0..=1` range.
///
/// Applied to service revenue to compute a building employee's
/// performance bonus.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Rate(Decimal);

impl Rate {
    /// [`Rate`] of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Rate`] by checking the provided value is
    /// greater than or equal to `0` and less than or equal to `1`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Rate`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be greater than or equal to `0` and less
    /// than or equal to `1`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }
}

impl FromStr for Rate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid rate value")
    }
}

impl ops::Mul<Rate> for Money {
    type Output = Money;

    fn mul(self, rhs: Rate) -> Self::Output {
        self * rhs.0
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Fractional multiplier in the `0..=1` range, as a decimal string.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Rate = super::Rate;

    impl Rate {
        fn to_output<S: ScalarValue>(r: &Rate) -> Value<S> {
            Value::scalar(r.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Rate` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Rate` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use crate::Money;

    use super::Rate;

    #[test]
    fn validates_range() {
        assert!(Rate::new(Decimal::ZERO).is_some());
        assert!(Rate::new(Decimal::ONE).is_some());
        assert!(Rate::new("0.05".parse().unwrap()).is_some());
        assert!(Rate::new("1.01".parse().unwrap()).is_none());
        assert!(Rate::new("-0.05".parse().unwrap()).is_none());
    }

    #[test]
    fn scales_money() {
        let revenue = Money::from_str("2000000").unwrap();
        let rate = Rate::from_str("0.05").unwrap();
        assert_eq!(revenue * rate, Money::from_str("100000").unwrap());
    }
}
