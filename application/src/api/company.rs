//! [`Company`]-related definitions.

use derive_more::{Display, From, FromStr, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{command, domain};

use crate::{api, api::scalar, define_error, AsError, Context, Error};

/// A tenant company renting offices of the building.
#[derive(Clone, Debug, From)]
pub struct Company(domain::Company);

/// A tenant company renting offices of the building.
#[graphql_object(context = Context)]
impl Company {
    /// Unique identifier of this `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Company.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Legal name of this `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Company.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Unique tax code of this `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Company.taxCode",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn tax_code(&self) -> TaxCode {
        self.0.tax_code.clone().into()
    }

    /// Contact email of this `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Company.email",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn email(&self) -> Option<Email> {
        self.0.email.clone().map(Into::into)
    }

    /// Registered address of this `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Company.address",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        self.0.address.clone().map(Into::into)
    }
}

/// Unique identifier of a `Company`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::company::Id, i32)]
#[into(domain::company::Id)]
#[graphql(name = "CompanyId", transparent)]
pub struct Id(i32);

/// Legal name of a `Company`.
#[derive(Clone, Debug, Display, From, FromStr, GraphQLScalar, Into)]
#[graphql(name = "CompanyName", with = scalar::Str)]
pub struct Name(domain::company::Name);

/// Unique tax code of a `Company`.
#[derive(Clone, Debug, Display, From, FromStr, GraphQLScalar, Into)]
#[graphql(name = "CompanyTaxCode", with = scalar::Str)]
pub struct TaxCode(domain::company::TaxCode);

/// Contact email of a `Company`.
#[derive(Clone, Debug, Display, From, FromStr, GraphQLScalar, Into)]
#[graphql(name = "CompanyEmail", with = scalar::Str)]
pub struct Email(domain::company::Email);

/// Registered address of a `Company`.
#[derive(Clone, Debug, Display, From, FromStr, GraphQLScalar, Into)]
#[graphql(name = "CompanyAddress", with = scalar::Str)]
pub struct Address(domain::company::Address);

impl AsError for command::create_company::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::create_company::ExecutionError as E;
        match self {
            E::Db(e) => e.try_as_error(),
            E::TaxCodeRaced | E::TaxCodeTaken(_) => {
                Some(TaxCodeError::Taken.into())
            }
        }
    }
}

impl AsError for command::update_company::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use command::update_company::ExecutionError as E;
        match self {
            E::CompanyNotExists(_) => {
                Some(api::query::CompanyError::NotExists.into())
            }
            E::Db(e) => e.try_as_error(),
            E::TaxCodeRaced | E::TaxCodeTaken(_) => {
                Some(TaxCodeError::Taken.into())
            }
        }
    }
}

define_error! {
    enum TaxCodeError {
        #[code = "TAX_CODE_TAKEN"]
        #[status = CONFLICT]
        #[message = "Tax code is already registered to another `Company`"]
        Taken,
    }
}
