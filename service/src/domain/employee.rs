//! [`BuildingEmployee`] definitions.

use std::str::FromStr;

use common::{define_kind, Date, Money};
use derive_more::{AsRef, Display, Error, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// Member of the building's own staff, delivering recurring services
/// to tenants.
///
/// Not to be confused with a tenant [`Company`]'s employee, which only
/// shows up as a consumer of daily services.
///
/// [`Company`]: crate::domain::Company
#[derive(Clone, Debug)]
pub struct BuildingEmployee {
    /// ID of this [`BuildingEmployee`].
    pub id: Id,

    /// First name of this [`BuildingEmployee`].
    pub first_name: String,

    /// Last name of this [`BuildingEmployee`].
    pub last_name: String,

    /// [`Role`] this [`BuildingEmployee`] works in.
    pub role: Role,

    /// Fixed monthly base salary of this [`BuildingEmployee`].
    pub base_salary: Money,

    /// [`Date`] this [`BuildingEmployee`] was hired.
    pub hire_date: Date,

    /// [`Status`] of this [`BuildingEmployee`].
    pub status: Status,
}

impl BuildingEmployee {
    /// Returns the full displayable name of this [`BuildingEmployee`].
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// ID of a [`BuildingEmployee`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Job role of a [`BuildingEmployee`] (e.g. `cleaner`, `technician`).
///
/// Free-form rather than a closed enum, as roles are defined by the
/// building's service catalogue and referenced by name from its salary
/// rules.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Into, PartialEq)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Role(String);

impl Role {
    /// Creates a new [`Role`] out of the provided `value`, if it
    /// represents a valid one.
    #[must_use]
    pub fn new(value: impl AsRef<str> + Into<String>) -> Option<Self> {
        Self::check(value.as_ref()).then(|| Self(value.into()))
    }

    /// Checks whether the provided `value` represents a valid [`Role`].
    #[must_use]
    pub fn check(value: impl AsRef<str>) -> bool {
        let value = value.as_ref();
        !value.trim().is_empty() && value.len() <= 64
    }
}

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or(InvalidRoleError)
    }
}

/// Error of a [`Role`] failing to be parsed.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("Invalid `employee::Role`")]
pub struct InvalidRoleError;

define_kind! {
    #[doc = "Status of a [`BuildingEmployee`]."]
    enum Status {
        #[doc = "The [`BuildingEmployee`] is on the payroll."]
        Working = 1,

        #[doc = "The [`BuildingEmployee`] resigned."]
        Resigned = 2,
    }
}

/// [`BuildingEmployee`] record to be inserted, with the ID yet to be
/// assigned by the store.
///
/// A newly hired employee always starts as [`Status::Working`].
#[derive(Clone, Debug)]
pub struct New {
    /// First name of the new [`BuildingEmployee`].
    pub first_name: String,

    /// Last name of the new [`BuildingEmployee`].
    pub last_name: String,

    /// [`Role`] the new [`BuildingEmployee`] works in.
    pub role: Role,

    /// Fixed monthly base salary of the new [`BuildingEmployee`].
    pub base_salary: Money,

    /// [`Date`] the new [`BuildingEmployee`] was hired.
    pub hire_date: Date,
}

/// Partial update of a [`BuildingEmployee`].
///
/// Only the provided fields are changed; the rest of the row is kept
/// as-is. Fields are fixed at compile time, so no dynamic column names
/// ever reach the store. [`Status`] transitions go through a dedicated
/// command instead.
#[derive(Clone, Debug, Default)]
pub struct Patch {
    /// New first name, if changed.
    pub first_name: Option<String>,

    /// New last name, if changed.
    pub last_name: Option<String>,

    /// New [`Role`], if changed.
    pub role: Option<Role>,

    /// New monthly base salary, if changed.
    pub base_salary: Option<Money>,
}

impl Patch {
    /// Applies this [`Patch`] to the provided [`BuildingEmployee`],
    /// field-by-field.
    pub fn apply_to(self, employee: &mut BuildingEmployee) {
        let Self {
            first_name,
            last_name,
            role,
            base_salary,
        } = self;
        if let Some(first_name) = first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            employee.last_name = last_name;
        }
        if let Some(role) = role {
            employee.role = role;
        }
        if let Some(base_salary) = base_salary {
            employee.base_salary = base_salary;
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{BuildingEmployee, Patch, Role, Status};

    #[test]
    fn role_validation() {
        assert!(Role::new("cleaner").is_some());
        assert!(Role::new("security guard").is_some());
        assert!(Role::new("").is_none());
        assert!(Role::new("   ").is_none());
        assert!(Role::new("r".repeat(65)).is_none());
    }

    #[test]
    fn full_name_joins_parts() {
        let employee = BuildingEmployee {
            id: 1.into(),
            first_name: "Minh".into(),
            last_name: "Tran".into(),
            role: Role::new("technician").unwrap(),
            base_salary: "9000000".parse().unwrap(),
            hire_date: "2024-03-01".parse().unwrap(),
            status: Status::Working,
        };
        assert_eq!(employee.full_name(), "Minh Tran");
    }

    #[test]
    fn patch_changes_provided_fields_only() {
        let mut employee = BuildingEmployee {
            id: 1.into(),
            first_name: "Minh".into(),
            last_name: "Tran".into(),
            role: Role::new("technician").unwrap(),
            base_salary: "9000000".parse().unwrap(),
            hire_date: "2024-03-01".parse().unwrap(),
            status: Status::Working,
        };

        Patch {
            role: Some(Role::new("supervisor").unwrap()),
            base_salary: Some("12000000".parse().unwrap()),
            ..Patch::default()
        }
        .apply_to(&mut employee);

        assert_eq!(employee.role, Role::new("supervisor").unwrap());
        assert_eq!(employee.base_salary, "12000000".parse().unwrap());
        assert_eq!(employee.first_name, "Minh");
        assert_eq!(employee.status, Status::Working);
    }
}
