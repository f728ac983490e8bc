//! [`BuildingEmployee`]-related definitions.

use common::{Date, Money};
use derive_more::{Display, From, FromStr, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{command, domain};

use crate::{api, api::scalar, define_error, AsError, Context, Error};

/// A member of the building's own staff.
#[derive(Clone, Debug, From)]
pub struct BuildingEmployee(domain::BuildingEmployee);

/// A member of the building's own staff.
#[graphql_object(context = Context)]
impl BuildingEmployee {
    /// Unique identifier of this `BuildingEmployee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "BuildingEmployee.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// First name of this `BuildingEmployee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "BuildingEmployee.firstName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.0.first_name
    }

    /// Last name of this `BuildingEmployee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "BuildingEmployee.lastName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.0.last_name
    }

    /// Job role of this `BuildingEmployee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "BuildingEmployee.role",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn role(&self) -> Role {
        self.0.role.clone().into()
    }

    /// Fixed monthly base salary of this `BuildingEmployee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "BuildingEmployee.baseSalary",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn base_salary(&self) -> Money {
        self.0.base_salary
    }

    /// `Date` this `BuildingEmployee` was hired.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "BuildingEmployee.hireDate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn hire_date(&self) -> Date {
        self.0.hire_date
    }

    /// Status of this `BuildingEmployee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "BuildingEmployee.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }
}

/// Unique identifier of a `BuildingEmployee`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::employee::Id, i32)]
#[into(domain::employee::Id)]
#[graphql(name = "BuildingEmployeeId", transparent)]
pub struct Id(i32);

/// Job role of a `BuildingEmployee`.
#[derive(Clone, Debug, Display, From, FromStr, GraphQLScalar, Into)]
#[graphql(name = "BuildingEmployeeRole", with = scalar::Str)]
pub struct Role(domain::employee::Role);

/// Status of a `BuildingEmployee`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "BuildingEmployeeStatus")]
pub enum Status {
    /// On the payroll.
    Working,

    /// Off the payroll, kept for history.
    Resigned,
}

impl From<domain::employee::Status> for Status {
    fn from(status: domain::employee::Status) -> Self {
        use domain::employee::Status as S;
        match status {
            S::Working => Self::Working,
            S::Resigned => Self::Resigned,
        }
    }
}

impl AsError for command::create_building_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::create_building_employee::ExecutionError as E;
        match self {
            E::Db(e) => e.try_as_error(),
            E::NonPositiveSalary(_) => {
                Some(SalaryError::NonPositive.into())
            }
        }
    }
}

impl AsError for command::update_building_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::update_building_employee::ExecutionError as E;
        match self {
            E::Db(e) => e.try_as_error(),
            E::EmployeeNotExists(_) => {
                Some(api::query::EmployeeError::NotExists.into())
            }
            E::NonPositiveSalary(_) => {
                Some(SalaryError::NonPositive.into())
            }
        }
    }
}

impl AsError for command::resign_building_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::resign_building_employee::ExecutionError as E;
        match self {
            E::AlreadyResigned(_) => {
                Some(ResignError::AlreadyResigned.into())
            }
            E::Db(e) => e.try_as_error(),
            E::EmployeeNotExists(_) => {
                Some(api::query::EmployeeError::NotExists.into())
            }
        }
    }
}

define_error! {
    enum SalaryError {
        #[code = "NON_POSITIVE_SALARY"]
        #[status = BAD_REQUEST]
        #[message = "`BuildingEmployee` base salary must be positive"]
        NonPositive,
    }
}

define_error! {
    enum ResignError {
        #[code = "ALREADY_RESIGNED"]
        #[status = CONFLICT]
        #[message = "`BuildingEmployee` has resigned already"]
        AlreadyResigned,
    }
}
