//! GraphQL [`Mutation`]s definitions.

use common::{Area, Date, Money, Period};
use juniper::graphql_object;
use service::{command, domain, Command as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new `Office`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NON_POSITIVE_AREA` - provided `area` is not positive;
    /// - `NON_POSITIVE_PRICE` - provided `basePrice` is not positive.
    #[tracing::instrument(
        skip_all,
        fields(
            area = %area,
            base_price = %base_price,
            floor = %floor,
            gql.name = "createOffice",
            name = %name,
            otel.name = Self::SPAN_NAME,
            position = ?position,
        ),
    )]
    pub async fn create_office(
        name: api::office::Name,
        area: Area,
        floor: i32,
        position: Option<api::office::Position>,
        base_price: Money,
        ctx: &Context,
    ) -> Result<api::Office, Error> {
        ctx.service()
            .execute(command::CreateOffice {
                name: name.into(),
                area,
                floor,
                position: position.map(Into::into),
                base_price,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Office` with the specified ID.
    ///
    /// Only the provided fields are changed.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NON_POSITIVE_AREA` - provided `area` is not positive;
    /// - `NON_POSITIVE_PRICE` - provided `basePrice` is not positive;
    /// - `OFFICE_NOT_EXISTS` - the `Office` with the specified ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            area = ?area,
            base_price = ?base_price,
            floor = ?floor,
            gql.name = "updateOffice",
            id = %id,
            name = ?name.as_ref().map(ToString::to_string),
            otel.name = Self::SPAN_NAME,
            position = ?position.as_ref().map(ToString::to_string),
        ),
    )]
    pub async fn update_office(
        id: api::office::Id,
        name: Option<api::office::Name>,
        area: Option<Area>,
        floor: Option<i32>,
        position: Option<api::office::Position>,
        base_price: Option<Money>,
        ctx: &Context,
    ) -> Result<api::Office, Error> {
        ctx.service()
            .execute(command::UpdateOffice {
                office_id: id.into(),
                patch: domain::office::Patch {
                    name: name.map(Into::into),
                    area,
                    floor,
                    position: position.map(Into::into),
                    base_price,
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Company`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `TAX_CODE_TAKEN` - provided `taxCode` is already registered to
    ///                      another `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createCompany",
            name = %name,
            otel.name = Self::SPAN_NAME,
            tax_code = %tax_code,
        ),
    )]
    pub async fn create_company(
        name: api::company::Name,
        tax_code: api::company::TaxCode,
        email: Option<api::company::Email>,
        address: Option<api::company::Address>,
        ctx: &Context,
    ) -> Result<api::Company, Error> {
        ctx.service()
            .execute(command::CreateCompany {
                name: name.into(),
                tax_code: tax_code.into(),
                email: email.map(Into::into),
                address: address.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Company` with the specified ID.
    ///
    /// Only the provided fields are changed.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `COMPANY_NOT_EXISTS` - the `Company` with the specified ID does not
    ///                          exist;
    /// - `TAX_CODE_TAKEN` - provided `taxCode` is already registered to
    ///                      another `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateCompany",
            name = ?name.as_ref().map(ToString::to_string),
            otel.name = Self::SPAN_NAME,
            tax_code = ?tax_code.as_ref().map(ToString::to_string),
        ),
    )]
    pub async fn update_company(
        id: api::company::Id,
        name: Option<api::company::Name>,
        tax_code: Option<api::company::TaxCode>,
        email: Option<api::company::Email>,
        address: Option<api::company::Address>,
        ctx: &Context,
    ) -> Result<api::Company, Error> {
        ctx.service()
            .execute(command::UpdateCompany {
                company_id: id.into(),
                patch: domain::company::Patch {
                    name: name.map(Into::into),
                    tax_code: tax_code.map(Into::into),
                    email: email.map(Into::into),
                    address: address.map(Into::into),
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new active `RentContract`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `COMPANY_NOT_EXISTS` - the `Company` with the specified ID does not
    ///                          exist;
    /// - `INVALID_PERIOD` - `endDate` is before `fromDate`;
    /// - `NON_POSITIVE_PRICE` - provided `rentPrice` is not positive;
    /// - `OFFICE_NOT_EXISTS` - the `Office` with the specified ID does not
    ///                         exist;
    /// - `OFFICE_OCCUPIED` - the `Office` is already rented out for an
    ///                       overlapping term.
    #[tracing::instrument(
        skip_all,
        fields(
            company_id = %company_id,
            end_date = %end_date,
            from_date = %from_date,
            gql.name = "createRentContract",
            office_id = %office_id,
            otel.name = Self::SPAN_NAME,
            rent_price = %rent_price,
            signed_date = ?signed_date,
        ),
    )]
    pub async fn create_rent_contract(
        office_id: api::office::Id,
        company_id: api::company::Id,
        from_date: Date,
        end_date: Date,
        signed_date: Option<Date>,
        rent_price: Money,
        ctx: &Context,
    ) -> Result<api::Contract, Error> {
        let term = Period::new(from_date, end_date)
            .ok_or_else(|| api::contract::PeriodError::Invalid.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateRentContract {
                office_id: office_id.into(),
                company_id: company_id.into(),
                term,
                signed_date,
                rent_price,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `RentContract` with the specified ID.
    ///
    /// Only the provided fields are changed. Moving an active contract to
    /// another `Office` or changing its term re-checks the availability.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `RentContract` with the specified ID
    ///                           does not exist;
    /// - `INVALID_PERIOD` - the patched term would end before it starts;
    /// - `OFFICE_NOT_EXISTS` - the `Office` with the specified ID does not
    ///                         exist;
    /// - `OFFICE_OCCUPIED` - the target `Office` is already rented out for
    ///                       the patched term.
    #[tracing::instrument(
        skip_all,
        fields(
            end_date = ?end_date,
            from_date = ?from_date,
            gql.name = "updateRentContract",
            id = %id,
            invoice_id = ?invoice_id,
            office_id = ?office_id,
            otel.name = Self::SPAN_NAME,
            rent_price = ?rent_price,
            signed_date = ?signed_date,
        ),
    )]
    pub async fn update_rent_contract(
        id: api::contract::Id,
        office_id: Option<api::office::Id>,
        invoice_id: Option<api::contract::InvoiceId>,
        from_date: Option<Date>,
        end_date: Option<Date>,
        signed_date: Option<Date>,
        rent_price: Option<Money>,
        ctx: &Context,
    ) -> Result<api::Contract, Error> {
        ctx.service()
            .execute(command::UpdateRentContract {
                contract_id: id.into(),
                patch: domain::contract::Patch {
                    office_id: office_id.map(Into::into),
                    invoice_id: invoice_id.map(Into::into),
                    from_date,
                    end_date,
                    signed_date,
                    rent_price,
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Terminates the active `RentContract` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CONTRACT_NOT_EXISTS` - the `RentContract` with the specified ID
    ///                           does not exist;
    /// - `INVALID_STATUS_TRANSITION` - the `RentContract` is not active.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "terminateContract",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn terminate_contract(
        id: api::contract::Id,
        ctx: &Context,
    ) -> Result<api::Contract, Error> {
        ctx.service()
            .execute(command::TransitionContract {
                contract_id: id.into(),
                to: domain::contract::Status::Terminated,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Hires a new `BuildingEmployee`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NON_POSITIVE_SALARY` - provided `baseSalary` is not positive.
    #[tracing::instrument(
        skip_all,
        fields(
            base_salary = %base_salary,
            first_name = %first_name,
            gql.name = "createBuildingEmployee",
            hire_date = %hire_date,
            last_name = %last_name,
            otel.name = Self::SPAN_NAME,
            role = %role,
        ),
    )]
    pub async fn create_building_employee(
        first_name: String,
        last_name: String,
        role: api::employee::Role,
        base_salary: Money,
        hire_date: Date,
        ctx: &Context,
    ) -> Result<api::BuildingEmployee, Error> {
        ctx.service()
            .execute(command::CreateBuildingEmployee {
                first_name,
                last_name,
                role: role.into(),
                base_salary,
                hire_date,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `BuildingEmployee` with the specified ID.
    ///
    /// Only the provided fields are changed.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `BuildingEmployee` with the specified ID
    ///                           does not exist;
    /// - `NON_POSITIVE_SALARY` - provided `baseSalary` is not positive.
    #[tracing::instrument(
        skip_all,
        fields(
            base_salary = ?base_salary,
            first_name = ?first_name,
            gql.name = "updateBuildingEmployee",
            id = %id,
            last_name = ?last_name,
            otel.name = Self::SPAN_NAME,
            role = ?role.as_ref().map(ToString::to_string),
        ),
    )]
    pub async fn update_building_employee(
        id: api::employee::Id,
        first_name: Option<String>,
        last_name: Option<String>,
        role: Option<api::employee::Role>,
        base_salary: Option<Money>,
        ctx: &Context,
    ) -> Result<api::BuildingEmployee, Error> {
        ctx.service()
            .execute(command::UpdateBuildingEmployee {
                employee_id: id.into(),
                patch: domain::employee::Patch {
                    first_name,
                    last_name,
                    role: role.map(Into::into),
                    base_salary,
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Takes the `BuildingEmployee` with the specified ID off the payroll.
    ///
    /// The record is kept, so past salary reports stay reproducible.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ALREADY_RESIGNED` - the `BuildingEmployee` has resigned already;
    /// - `EMPLOYEE_NOT_EXISTS` - the `BuildingEmployee` with the specified ID
    ///                           does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "resignBuildingEmployee",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn resign_building_employee(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::BuildingEmployee, Error> {
        ctx.service()
            .execute(command::ResignBuildingEmployee {
                employee_id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}
