//! [`Contract`]-related definitions.

use common::{Area, Date, Money};
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{command, domain, read};

use crate::{api, define_error, AsError, Context, Error};

/// A rent contract binding a `Company` to an `Office` for a term.
#[derive(Clone, Debug, From)]
pub struct Contract(domain::RentContract);

/// A rent contract binding a `Company` to an `Office` for a term.
#[graphql_object(name = "RentContract", context = Context)]
impl Contract {
    /// Unique identifier of this `RentContract`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// ID of the rented `Office`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.officeId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn office_id(&self) -> api::office::Id {
        self.0.office_id.into()
    }

    /// ID of the renting `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.companyId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn company_id(&self) -> api::company::Id {
        self.0.company_id.into()
    }

    /// ID of the invoice billing this `RentContract`, if issued.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.invoiceId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn invoice_id(&self) -> Option<InvoiceId> {
        self.0.invoice_id.map(Into::into)
    }

    /// First `Date` of the rent term (inclusive).
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.fromDate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn from_date(&self) -> Date {
        self.0.term.from()
    }

    /// Last `Date` of the rent term (inclusive).
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.endDate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.0.term.end()
    }

    /// `Date` this `RentContract` was signed on.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.signedDate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn signed_date(&self) -> Option<Date> {
        self.0.signed_date
    }

    /// Monthly rent price of this `RentContract`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.rentPrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn rent_price(&self) -> Money {
        self.0.rent_price
    }

    /// Status of this `RentContract`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContract.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }
}

/// Unique identifier of a `RentContract`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::contract::Id, i32)]
#[into(domain::contract::Id)]
#[graphql(name = "RentContractId", transparent)]
pub struct Id(i32);

/// Unique identifier of an invoice.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::invoice::Id, i32)]
#[into(domain::invoice::Id)]
#[graphql(name = "InvoiceId", transparent)]
pub struct InvoiceId(i32);

/// Status of a `RentContract`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "RentContractStatus")]
pub enum Status {
    /// Term is in force.
    Active,

    /// Term ran out.
    Expired,

    /// Cancelled before its end date.
    Terminated,
}

impl From<domain::contract::Status> for Status {
    fn from(status: domain::contract::Status) -> Self {
        use domain::contract::Status as S;
        match status {
            S::Active => Self::Active,
            S::Expired => Self::Expired,
            S::Terminated => Self::Terminated,
        }
    }
}

/// `RentContract` along with basic info of its rented `Office`.
#[derive(Clone, Debug, From)]
pub struct WithOffice(read::contract::WithOffice);

/// `RentContract` along with basic info of its rented `Office`.
#[graphql_object(name = "RentContractWithOffice", context = Context)]
impl WithOffice {
    /// The `RentContract` itself.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContractWithOffice.contract",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn contract(&self) -> Contract {
        self.0.contract.clone().into()
    }

    /// Name of the rented `Office`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContractWithOffice.officeName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn office_name(&self) -> api::office::Name {
        self.0.office_name.clone().into()
    }

    /// `Area` of the rented `Office`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RentContractWithOffice.officeArea",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn office_area(&self) -> Area {
        self.0.office_area
    }
}

impl AsError for command::create_rent_contract::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::create_rent_contract::ExecutionError as E;
        match self {
            E::CompanyNotExists(_) => {
                Some(api::query::CompanyError::NotExists.into())
            }
            E::Db(e) => e.try_as_error(),
            E::NonPositivePrice(_) => Some(PriceError::NonPositive.into()),
            E::OfficeOccupied(_) => Some(OccupancyError::Occupied.into()),
            E::OfficeNotExists(_) => {
                Some(api::query::OfficeError::NotExists.into())
            }
        }
    }
}

impl AsError for command::update_rent_contract::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::update_rent_contract::ExecutionError as E;
        match self {
            E::ContractNotExists(_) => {
                Some(api::query::ContractError::NotExists.into())
            }
            E::Db(e) => e.try_as_error(),
            E::InvalidPeriod => Some(PeriodError::Invalid.into()),
            E::OfficeOccupied(_) => Some(OccupancyError::Occupied.into()),
            E::OfficeNotExists(_) => {
                Some(api::query::OfficeError::NotExists.into())
            }
        }
    }
}

impl AsError for command::transition_contract::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::transition_contract::ExecutionError as E;
        match self {
            E::ContractNotExists(_) => {
                Some(api::query::ContractError::NotExists.into())
            }
            E::Db(e) => e.try_as_error(),
            E::InvalidTransition { .. } => {
                Some(TransitionError::Invalid.into())
            }
        }
    }
}

define_error! {
    enum OccupancyError {
        #[code = "OFFICE_OCCUPIED"]
        #[status = CONFLICT]
        #[message = "`Office` is already rented out for an overlapping term"]
        Occupied,
    }
}

define_error! {
    enum PeriodError {
        #[code = "INVALID_PERIOD"]
        #[status = BAD_REQUEST]
        #[message = "Term must not end before it starts"]
        Invalid,
    }
}

define_error! {
    enum PriceError {
        #[code = "NON_POSITIVE_PRICE"]
        #[status = BAD_REQUEST]
        #[message = "Rent price must be positive"]
        NonPositive,
    }
}

define_error! {
    enum TransitionError {
        #[code = "INVALID_STATUS_TRANSITION"]
        #[status = CONFLICT]
        #[message = "`RentContract` status does not allow this transition"]
        Invalid,
    }
}
