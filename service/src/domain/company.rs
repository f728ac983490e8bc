//! [`Company`] definitions.

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display, From, Into};
use regex::Regex;
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// Tenant company renting offices in the building.
#[derive(Clone, Debug)]
pub struct Company {
    /// ID of this [`Company`].
    pub id: Id,

    /// [`Name`] of this [`Company`].
    pub name: Name,

    /// Globally unique [`TaxCode`] of this [`Company`].
    pub tax_code: TaxCode,

    /// Contact [`Email`] of this [`Company`], if any.
    pub email: Option<Email>,

    /// Registered [`Address`] of this [`Company`], if any.
    pub address: Option<Address>,
}

/// ID of a [`Company`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Name of a [`Company`].
#[derive(AsRef, Clone, Debug, Display, Eq, Into, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let valid =
            name.trim() == name && !name.is_empty() && name.len() <= 256;
        valid.then_some(Self(name))
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Tax code of a [`Company`].
///
/// Globally unique; uniqueness is re-checked at write time (excluding
/// the company itself on update) and backed by a database constraint.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct TaxCode(String);

impl TaxCode {
    /// Creates a new [`TaxCode`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        Self::check(&code).then_some(Self(code))
    }

    /// Checks whether the given `code` is a valid [`TaxCode`]:
    /// ASCII alphanumerics and dashes, between 1 and 32 characters.
    fn check(code: impl AsRef<str>) -> bool {
        /// Regular expression checking the [`TaxCode`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[0-9A-Za-z-]{1,32}$").expect("valid regex")
        });

        REGEX.is_match(code.as_ref())
    }
}

impl FromStr for TaxCode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `TaxCode`")
    }
}

/// Contact email of a [`Company`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `email` is valid.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Option<Self> {
        let email = email.into();
        Self::check(&email).then_some(Self(email))
    }

    /// Checks whether the given `email` is a valid [`Email`].
    fn check(email: impl AsRef<str>) -> bool {
        let email = email.as_ref();
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && email.len() <= 320
            && !email.contains(char::is_whitespace)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Registered address of a [`Company`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        let valid = !address.trim().is_empty() && address.len() <= 512;
        valid.then_some(Self(address))
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

/// [`Company`] record to be inserted, with the ID yet to be assigned
/// by the store.
#[derive(Clone, Debug)]
pub struct New {
    /// [`Name`] of the new [`Company`].
    pub name: Name,

    /// [`TaxCode`] of the new [`Company`].
    pub tax_code: TaxCode,

    /// Contact [`Email`] of the new [`Company`], if any.
    pub email: Option<Email>,

    /// Registered [`Address`] of the new [`Company`], if any.
    pub address: Option<Address>,
}

/// Partial update of a [`Company`].
///
/// Only the provided fields are changed; the rest of the row is kept
/// as-is. Fields are fixed at compile time, so no dynamic column names
/// ever reach the store.
#[derive(Clone, Debug, Default)]
pub struct Patch {
    /// New [`Name`], if changed.
    pub name: Option<Name>,

    /// New [`TaxCode`], if changed.
    pub tax_code: Option<TaxCode>,

    /// New contact [`Email`], if changed.
    pub email: Option<Email>,

    /// New registered [`Address`], if changed.
    pub address: Option<Address>,
}

impl Patch {
    /// Applies this [`Patch`] to the provided [`Company`],
    /// field-by-field.
    pub fn apply_to(self, company: &mut Company) {
        let Self {
            name,
            tax_code,
            email,
            address,
        } = self;
        if let Some(name) = name {
            company.name = name;
        }
        if let Some(tax_code) = tax_code {
            company.tax_code = tax_code;
        }
        if let Some(email) = email {
            company.email = Some(email);
        }
        if let Some(address) = address {
            company.address = Some(address);
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Email, TaxCode};

    #[test]
    fn tax_code_validation() {
        assert!(TaxCode::new("0312345678").is_some());
        assert!(TaxCode::new("0312345678-001").is_some());
        assert!(TaxCode::new("").is_none());
        assert!(TaxCode::new("tax code").is_none());
    }

    #[test]
    fn email_validation() {
        assert!(Email::new("billing@acme.example").is_some());
        assert!(Email::new("billing").is_none());
        assert!(Email::new("billing@").is_none());
        assert!(Email::new("a b@acme.example").is_none());
    }
}
