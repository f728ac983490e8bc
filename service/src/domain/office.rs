//! [`Office`] definitions.

use std::str::FromStr;

use common::{Area, Money};
use derive_more::{AsRef, Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// Rentable office unit of the building.
#[derive(Clone, Debug)]
pub struct Office {
    /// ID of this [`Office`].
    pub id: Id,

    /// [`Name`] of this [`Office`].
    pub name: Name,

    /// Floor area of this [`Office`].
    pub area: Area,

    /// Floor this [`Office`] is located on.
    pub floor: i32,

    /// Optional position label of this [`Office`] within its floor.
    pub position: Option<Position>,

    /// Base monthly price of this [`Office`].
    pub base_price: Money,
}

/// ID of an [`Office`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Name of an [`Office`], a short unique-ish code like `A-101`.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Position label of an [`Office`] within its floor.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Position(String);

impl Position {
    /// Creates a new [`Position`] if the given `label` is valid.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        let valid =
            label.trim() == label && !label.is_empty() && label.len() <= 128;
        valid.then_some(Self(label))
    }
}

impl FromStr for Position {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Position`")
    }
}

/// [`Office`] record to be inserted, with the ID yet to be assigned by
/// the store.
#[derive(Clone, Debug)]
pub struct New {
    /// [`Name`] of the new [`Office`].
    pub name: Name,

    /// Floor area of the new [`Office`].
    pub area: Area,

    /// Floor the new [`Office`] is located on.
    pub floor: i32,

    /// Optional position label of the new [`Office`].
    pub position: Option<Position>,

    /// Base monthly price of the new [`Office`].
    pub base_price: Money,
}

/// Partial update of an [`Office`].
///
/// Only the provided fields are changed; the rest of the row is kept
/// as-is. Fields are fixed at compile time, so no dynamic column names
/// ever reach the store.
#[derive(Clone, Debug, Default)]
pub struct Patch {
    /// New [`Name`], if changed.
    pub name: Option<Name>,

    /// New floor area, if changed.
    pub area: Option<Area>,

    /// New floor, if the [`Office`] is re-registered on another one.
    pub floor: Option<i32>,

    /// New position label, if changed.
    pub position: Option<Position>,

    /// New base monthly price, if changed.
    pub base_price: Option<Money>,
}

impl Patch {
    /// Applies this [`Patch`] to the provided [`Office`],
    /// field-by-field.
    pub fn apply_to(self, office: &mut Office) {
        let Self {
            name,
            area,
            floor,
            position,
            base_price,
        } = self;
        if let Some(name) = name {
            office.name = name;
        }
        if let Some(area) = area {
            office.area = area;
        }
        if let Some(floor) = floor {
            office.floor = floor;
        }
        if let Some(position) = position {
            office.position = Some(position);
        }
        if let Some(base_price) = base_price {
            office.base_price = base_price;
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Name, Office, Patch, Position};

    fn office() -> Office {
        Office {
            id: 1.into(),
            name: Name::new("A-101").unwrap(),
            area: "45.5".parse().unwrap(),
            floor: 1,
            position: None,
            base_price: "15000000".parse().unwrap(),
        }
    }

    #[test]
    fn name_validation() {
        assert!(Name::new("A-101").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new(" A-101").is_none());
        assert!(Name::new("n".repeat(129)).is_none());
    }

    #[test]
    fn patch_changes_provided_fields_only() {
        let mut office = office();

        Patch {
            floor: Some(3),
            position: Some(Position::new("east wing").unwrap()),
            ..Patch::default()
        }
        .apply_to(&mut office);

        assert_eq!(office.floor, 3);
        assert_eq!(office.position, Some(Position::new("east wing").unwrap()));
        assert_eq!(office.name, Name::new("A-101").unwrap());
        assert_eq!(office.base_price, "15000000".parse().unwrap());
    }
}
