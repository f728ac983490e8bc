//! [`FuzzPattern`] definition.

use derive_more::Display;
use itertools::Itertools as _;
use postgres_types::{FromSql, ToSql};

/// `SIMILAR TO` characters to be escaped in a user-provided input.
const ESCAPED: [char; 13] =
    ['\\', '%', '|', '*', '+', '?', '{', '}', '(', ')', '[', ']', '_'];

/// SQL pattern to be used for fuzzy searching.
///
/// Every whitespace-separated word of the input matches on its own, so
/// `"acme ltd"` finds both `"Acme Ltd"` and `"Ltd Acme"`.
#[derive(Clone, Debug, Display, Eq, FromSql, PartialEq, ToSql)]
#[postgres(transparent)]
pub struct FuzzPattern(String);

impl FuzzPattern {
    /// Creates a new [`FuzzPattern`] out of the given `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self(format!(
            "({})",
            input.split_ascii_whitespace().format_with("|", |word, f| {
                let escaped = word
                    .chars()
                    .flat_map(|c| {
                        ESCAPED
                            .contains(&c)
                            .then_some('\\')
                            .into_iter()
                            .chain([c])
                    })
                    .collect::<String>();
                f(&format_args!("%{escaped}%"))
            }),
        ))
    }
}

#[cfg(test)]
mod spec {
    use super::FuzzPattern;

    #[test]
    fn escapes_pattern_metacharacters() {
        assert_eq!(
            FuzzPattern::new("acme (ltd)").to_string(),
            r"(%acme%|%\(ltd\)%)",
        );
    }

    #[test]
    fn matches_each_word_separately() {
        assert_eq!(FuzzPattern::new("a b").to_string(), "(%a%|%b%)");
    }
}
