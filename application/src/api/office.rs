//! [`Office`]-related definitions.

use common::{Area, Money};
use derive_more::{Display, From, FromStr, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{command, domain};

use crate::{api, api::scalar, define_error, AsError, Context, Error};

/// A rentable office unit of the building.
#[derive(Clone, Debug, From)]
pub struct Office(domain::Office);

/// A rentable office unit of the building.
#[graphql_object(context = Context)]
impl Office {
    /// Unique identifier of this `Office`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Office.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Name of this `Office`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Office.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Floor `Area` of this `Office`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Office.area",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn area(&self) -> Area {
        self.0.area
    }

    /// Floor this `Office` is located on.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Office.floor",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn floor(&self) -> i32 {
        self.0.floor
    }

    /// Position label of this `Office` on its floor.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Office.position",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.0.position.clone().map(Into::into)
    }

    /// Base monthly rent price of this `Office`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Office.basePrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn base_price(&self) -> Money {
        self.0.base_price
    }
}

/// Unique identifier of an `Office`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::office::Id, i32)]
#[into(domain::office::Id)]
#[graphql(name = "OfficeId", transparent)]
pub struct Id(i32);

/// Name of an `Office`.
#[derive(Clone, Debug, Display, From, FromStr, GraphQLScalar, Into)]
#[graphql(name = "OfficeName", with = scalar::Str)]
pub struct Name(domain::office::Name);

/// Position label of an `Office` on its floor.
#[derive(Clone, Debug, Display, From, FromStr, GraphQLScalar, Into)]
#[graphql(name = "OfficePosition", with = scalar::Str)]
pub struct Position(domain::office::Position);

impl AsError for command::create_office::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::create_office::ExecutionError as E;
        match self {
            E::Db(e) => e.try_as_error(),
            E::NonPositiveArea(_) => {
                Some(ValidationError::NonPositiveArea.into())
            }
            E::NonPositivePrice(_) => {
                Some(ValidationError::NonPositivePrice.into())
            }
        }
    }
}

impl AsError for command::update_office::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::update_office::ExecutionError as E;
        match self {
            E::Db(e) => e.try_as_error(),
            E::NonPositiveArea(_) => {
                Some(ValidationError::NonPositiveArea.into())
            }
            E::NonPositivePrice(_) => {
                Some(ValidationError::NonPositivePrice.into())
            }
            E::OfficeNotExists(_) => {
                Some(api::query::OfficeError::NotExists.into())
            }
        }
    }
}

define_error! {
    enum ValidationError {
        #[code = "NON_POSITIVE_AREA"]
        #[status = BAD_REQUEST]
        #[message = "`Office` area must be positive"]
        NonPositiveArea,

        #[code = "NON_POSITIVE_PRICE"]
        #[status = BAD_REQUEST]
        #[message = "`Office` base price must be positive"]
        NonPositivePrice,
    }
}
