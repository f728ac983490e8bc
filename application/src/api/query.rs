//! GraphQL [`Query`]s definitions.

use common::{Date, Month, Period, Slice};
use juniper::graphql_object;
use service::{query, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the `Office` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFICE_NOT_EXISTS` - the `Office` with the specified ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "office",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn office(
        id: api::office::Id,
        ctx: &Context,
    ) -> Result<api::Office, Error> {
        ctx.service()
            .execute(query::office::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| OfficeError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `Office`s, ordered by ID.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "offices",
            limit = ?limit,
            offset = ?offset,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn offices(
        offset: Option<i32>,
        limit: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<api::Office>, Error> {
        ctx.service()
            .execute(query::office::List::by(Slice::new(
                offset.map(Into::into),
                limit.map(Into::into),
            )))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|offices| offices.into_iter().map(Into::into).collect())
    }

    /// Returns the `Company` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `COMPANY_NOT_EXISTS` - the `Company` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "company",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn company(
        id: api::company::Id,
        ctx: &Context,
    ) -> Result<api::Company, Error> {
        ctx.service()
            .execute(query::company::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| CompanyError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `Company`s, ordered by ID.
    ///
    /// If `name` is provided, only `Company`s with a matching name are
    /// returned.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "companies",
            limit = ?limit,
            name = ?name,
            offset = ?offset,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn companies(
        name: Option<String>,
        offset: Option<i32>,
        limit: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<api::Company>, Error> {
        ctx.service()
            .execute(query::company::List::by(query::company::list::Selector {
                name,
                slice: Slice::new(
                    offset.map(Into::into),
                    limit.map(Into::into),
                ),
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|companies| companies.into_iter().map(Into::into).collect())
    }

    /// Returns the `RentContract` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `RentContract` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "contract",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn contract(
        id: api::contract::Id,
        ctx: &Context,
    ) -> Result<api::Contract, Error> {
        ctx.service()
            .execute(query::contract::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| ContractError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `RentContract`s of the specified `Company`, most
    /// recent term first.
    #[tracing::instrument(
        skip_all,
        fields(
            company_id = %company_id,
            gql.name = "companyContracts",
            limit = ?limit,
            offset = ?offset,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn company_contracts(
        company_id: api::company::Id,
        offset: Option<i32>,
        limit: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<api::contract::WithOffice>, Error> {
        ctx.service()
            .execute(query::contract::ByCompany::by((
                company_id.into(),
                Slice::new(offset.map(Into::into), limit.map(Into::into)),
            )))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|contracts| contracts.into_iter().map(Into::into).collect())
    }

    /// Returns the `BuildingEmployee` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `BuildingEmployee` with the specified ID
    ///                           does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "buildingEmployee",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn building_employee(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::BuildingEmployee, Error> {
        ctx.service()
            .execute(query::employee::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| EmployeeError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `BuildingEmployee`s, ordered by ID.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "buildingEmployees",
            limit = ?limit,
            offset = ?offset,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn building_employees(
        offset: Option<i32>,
        limit: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<api::BuildingEmployee>, Error> {
        ctx.service()
            .execute(query::employee::List::by(Slice::new(
                offset.map(Into::into),
                limit.map(Into::into),
            )))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|employees| employees.into_iter().map(Into::into).collect())
    }

    /// Checks whether the `Office` is free for the whole term.
    ///
    /// An active `RentContract` may be excluded from the check via
    /// `excludeContract`, which makes the query usable before moving an
    /// existing contract.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_PERIOD` - `endDate` is before `fromDate`.
    #[tracing::instrument(
        skip_all,
        fields(
            end_date = %end_date,
            exclude_contract = ?exclude_contract,
            from_date = %from_date,
            gql.name = "checkAvailability",
            office_id = %office_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn check_availability(
        office_id: api::office::Id,
        from_date: Date,
        end_date: Date,
        exclude_contract: Option<api::contract::Id>,
        ctx: &Context,
    ) -> Result<bool, Error> {
        let term = Period::new(from_date, end_date)
            .ok_or_else(|| api::contract::PeriodError::Invalid.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(query::office::Availability {
                office_id: office_id.into(),
                term,
                exclude: exclude_contract.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }

    /// Calculates the `MonthlyCostReport` of the specified `Company`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `COMPANY_NOT_EXISTS` - the `Company` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            company_id = %company_id,
            gql.name = "monthlyCost",
            month = %month,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn monthly_cost(
        company_id: api::company::Id,
        month: Month,
        ctx: &Context,
    ) -> Result<api::report::MonthlyCost, Error> {
        ctx.service()
            .execute(query::report::MonthlyCost {
                company_id: company_id.into(),
                month,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Calculates the `ServiceDetailsReport` of the specified `Company`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `COMPANY_NOT_EXISTS` - the `Company` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            company_id = %company_id,
            gql.name = "serviceDetails",
            month = %month,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn service_details(
        company_id: api::company::Id,
        month: Month,
        ctx: &Context,
    ) -> Result<api::report::ServiceDetails, Error> {
        ctx.service()
            .execute(query::report::ServiceDetails {
                company_id: company_id.into(),
                month,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Calculates the `SalaryRecord`s of all working building employees for
    /// the specified `Month`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "monthlySalaries",
            month = %month,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn monthly_salaries(
        month: Month,
        ctx: &Context,
    ) -> Result<Vec<api::report::SalaryRecord>, Error> {
        ctx.service()
            .execute(query::report::Salaries { month })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|records| records.into_iter().map(Into::into).collect())
    }

    /// Calculates the `FinanceSummary` of the building for the specified
    /// `Month`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "buildingFinance",
            month = %month,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn building_finance(
        month: Month,
        ctx: &Context,
    ) -> Result<api::report::FinanceSummary, Error> {
        ctx.service()
            .execute(query::report::Finance { month })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Calculates the `FinanceDetails` of the building for the specified
    /// `Month`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "buildingFinanceDetails",
            month = %month,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn building_finance_details(
        month: Month,
        ctx: &Context,
    ) -> Result<api::report::FinanceDetails, Error> {
        ctx.service()
            .execute(query::report::FinanceDetails { month })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

define_error! {
    enum CompanyError {
        #[code = "COMPANY_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Company` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum ContractError {
        #[code = "CONTRACT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`RentContract` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum EmployeeError {
        #[code = "EMPLOYEE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`BuildingEmployee` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum OfficeError {
        #[code = "OFFICE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Office` with the specified ID does not exist"]
        NotExists,
    }
}
