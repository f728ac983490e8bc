//! GraphQL scalar definitions.

use std::{fmt, str::FromStr};

use juniper::{
    GraphQLType, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken,
    ScalarValue, Value,
};

/// Helper type to use in `#[graphql(with = ..)]` attribute for scalars
/// represented as strings on the wire.
///
/// Uses the [`Display`] impl of the target type to render it, and its
/// [`FromStr`] impl to parse (and so validate) the input.
///
/// [`Display`]: fmt::Display
#[derive(Debug)]
pub struct Str;

impl Str {
    /// Renders the target type as a string scalar [`Value`].
    pub fn to_output<T, S>(value: &T) -> Value<S>
    where
        T: fmt::Display,
        S: ScalarValue,
    {
        Value::from(value.to_string())
    }

    /// Parses the target type out of a string scalar [`Value`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the input value is not a string;
    /// - the input value fails the target type's parsing.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    pub fn from_input<T, S>(input: &InputValue<S>) -> Result<T, String>
    where
        T: FromStr + GraphQLType<S, TypeInfo = ()>,
        T::Err: fmt::Display,
        S: ScalarValue,
    {
        let s = input.as_string_value().ok_or_else(|| {
            format!(
                "Cannot parse input scalar `{}`: expected string input \
                 value, found: {input}",
                T::name(&()).expect("always has a name"),
            )
        })?;
        s.parse().map_err(|e| {
            format!(
                "Cannot parse input scalar `{}` from \"{s}\" string: {e}",
                T::name(&()).expect("always has a name"),
            )
        })
    }

    /// Parse the provided [`ScalarToken`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be parsed as [`String`].
    pub fn parse_token<S: ScalarValue>(
        value: ScalarToken<'_>,
    ) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(value)
    }
}
