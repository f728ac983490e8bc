//! Report definitions.

use common::{Area, Date, Money, Month, Rate};
use derive_more::From;
use juniper::{graphql_object, GraphQLEnum};
use service::{domain, query, read};

use crate::{api, AsError, Context, Error};

/// Monthly cost report of a single `Company`.
#[derive(Clone, Debug, From)]
pub struct MonthlyCost(query::report::cost::Output);

/// Monthly cost report of a single `Company`.
#[graphql_object(name = "MonthlyCostReport", context = Context)]
impl MonthlyCost {
    /// ID of the `Company` this report is about.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyCostReport.companyId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn company_id(&self) -> api::company::Id {
        self.0.company_id.into()
    }

    /// `Month` this report covers.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyCostReport.month",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn month(&self) -> Month {
        self.0.month
    }

    /// Total rent cost over all active `RentContract`s of the `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyCostReport.rentCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn rent_cost(&self) -> Money {
        self.0.rent_cost
    }

    /// Total rented `Area` of the `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyCostReport.totalArea",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_area(&self) -> Area {
        self.0.total_area
    }

    /// Per-service cost breakdown.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyCostReport.serviceCosts",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn service_costs(&self) -> Vec<ServiceCost> {
        self.0.service_costs.iter().cloned().map(Into::into).collect()
    }

    /// Total service cost of the `Company`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyCostReport.totalServiceCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_service_cost(&self) -> Money {
        self.0.total_service_cost
    }

    /// Sum of the rent and service costs.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "MonthlyCostReport.totalCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_cost(&self) -> Money {
        self.0.total_cost
    }
}

/// Total cost of one service in a `MonthlyCostReport`.
#[derive(Clone, Debug, From)]
pub struct ServiceCost(query::report::cost::ServiceCost);

/// Total cost of one service in a `MonthlyCostReport`.
#[graphql_object(context = Context)]
impl ServiceCost {
    /// Name of the service.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.0.service_name
    }

    /// Total cost of the service.
    #[must_use]
    pub fn total(&self) -> Money {
        self.0.total
    }
}

/// Itemized service usage of a single `Company` for a `Month`.
#[derive(Clone, Debug, From)]
pub struct ServiceDetails(query::report::cost::Details);

/// Itemized service usage of a single `Company` for a `Month`.
#[graphql_object(name = "ServiceDetailsReport", context = Context)]
impl ServiceDetails {
    /// Name of the `Company` this report is about.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "ServiceDetailsReport.companyName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.0.company_name
    }

    /// `Month` this report covers.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "ServiceDetailsReport.month",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn month(&self) -> Month {
        self.0.month
    }

    /// Lines of the company-wide monthly services.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "ServiceDetailsReport.monthlyLines",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn monthly_lines(&self) -> Vec<MonthlyUsageLine> {
        self.0.monthly_lines.iter().cloned().map(Into::into).collect()
    }

    /// Lines of the per-employee daily services.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "ServiceDetailsReport.dailyLines",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn daily_lines(&self) -> Vec<DailyUsageLine> {
        self.0.daily_lines.iter().cloned().map(Into::into).collect()
    }

    /// Total service cost over all the lines.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "ServiceDetailsReport.totalServiceCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_service_cost(&self) -> Money {
        self.0.total_service_cost
    }
}

/// Line of a company-wide monthly service usage.
#[derive(Clone, Debug, From)]
pub struct MonthlyUsageLine(read::report::MonthlyUsageRow);

/// Line of a company-wide monthly service usage.
#[graphql_object(context = Context)]
impl MonthlyUsageLine {
    /// Name of the used service.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.0.service_name
    }

    /// Billed quantity, in units of the service price method.
    #[must_use]
    pub fn quantity(&self) -> String {
        self.0.quantity.to_string()
    }

    /// Unit price of the service.
    #[must_use]
    pub fn unit_price(&self) -> Money {
        self.0.unit_price
    }

    /// Total billed amount of this line.
    #[must_use]
    pub fn total(&self) -> Money {
        self.0.total
    }
}

/// Line of a per-employee daily service usage.
#[derive(Clone, Debug, From)]
pub struct DailyUsageLine(read::report::DailyUsageRow);

/// Line of a per-employee daily service usage.
#[graphql_object(context = Context)]
impl DailyUsageLine {
    /// Full name of the company employee who used the service.
    #[must_use]
    pub fn employee_name(&self) -> &str {
        &self.0.employee_name
    }

    /// Name of the used service.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.0.service_name
    }

    /// `Date` the service was used on.
    #[must_use]
    pub fn usage_date(&self) -> Date {
        self.0.usage_date
    }

    /// Billed amount of this line.
    #[must_use]
    pub fn price(&self) -> Money {
        self.0.price
    }
}

/// Payroll record of a single working building employee.
#[derive(Clone, Debug, From)]
pub struct SalaryRecord(query::report::salary::Record);

/// Payroll record of a single working building employee.
#[graphql_object(context = Context)]
impl SalaryRecord {
    /// ID of the building employee.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SalaryRecord.employeeId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn employee_id(&self) -> api::employee::Id {
        self.0.employee_id.into()
    }

    /// Full name of the building employee.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.0.full_name
    }

    /// Role of the building employee.
    #[must_use]
    pub fn role(&self) -> String {
        self.0.role.to_string()
    }

    /// Base salary of the building employee.
    #[must_use]
    pub fn base_salary(&self) -> Money {
        self.0.base_salary
    }

    /// Bonus `Rate` applied to the revenue of subscribed services.
    #[must_use]
    pub fn bonus_rate(&self) -> Rate {
        self.0.bonus_rate
    }

    /// Revenue of the services the employee is subscribed to.
    #[must_use]
    pub fn monthly_revenue(&self) -> Money {
        self.0.monthly_revenue
    }

    /// Base salary plus the revenue bonus.
    #[must_use]
    pub fn total_salary(&self) -> Money {
        self.0.total_salary
    }
}

/// Building-wide financial summary of a `Month`.
#[derive(Clone, Debug, From)]
pub struct FinanceSummary(query::report::finance::Summary);

/// Building-wide financial summary of a `Month`.
#[graphql_object(context = Context)]
impl FinanceSummary {
    /// `Month` this summary covers.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinanceSummary.month",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn month(&self) -> Month {
        self.0.month
    }

    /// Total invoiced revenue of the `Month`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinanceSummary.totalRevenue",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_revenue(&self) -> Money {
        self.0.total_revenue
    }

    /// Total salary expense of the `Month`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinanceSummary.totalExpense",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn total_expense(&self) -> Money {
        self.0.total_expense
    }

    /// Revenue minus expense, may be negative.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinanceSummary.netProfit",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn net_profit(&self) -> Money {
        self.0.net_profit
    }

    /// Estimated rent/services breakdown of the revenue.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinanceSummary.revenueEstimate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn revenue_estimate(&self) -> RevenueEstimate {
        self.0.revenue_estimate.into()
    }
}

/// Estimated rent/services breakdown of the revenue.
#[derive(Clone, Copy, Debug, From)]
pub struct RevenueEstimate(query::report::finance::Estimate);

/// Estimated rent/services breakdown of the revenue.
#[graphql_object(context = Context)]
impl RevenueEstimate {
    /// Revenue attributed to office rent.
    #[must_use]
    pub fn rent(&self) -> Money {
        self.0.rent
    }

    /// Revenue attributed to services.
    #[must_use]
    pub fn services(&self) -> Money {
        self.0.services
    }
}

/// Building-wide financial summary along with its line items.
#[derive(Clone, Debug, From)]
pub struct FinanceDetails(query::report::finance::Details);

/// Building-wide financial summary along with its line items.
#[graphql_object(context = Context)]
impl FinanceDetails {
    /// The summary itself.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinanceDetails.summary",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn summary(&self) -> FinanceSummary {
        self.0.summary.clone().into()
    }

    /// Invoices making up the revenue, most recent first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinanceDetails.revenueRows",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn revenue_rows(&self) -> Vec<InvoiceLine> {
        self.0.revenue_rows.iter().cloned().map(Into::into).collect()
    }

    /// Payroll records making up the expense, highest salary first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "FinanceDetails.expenseRows",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn expense_rows(&self) -> Vec<SalaryRecord> {
        self.0.expense_rows.iter().cloned().map(Into::into).collect()
    }
}

/// Invoice line of a `FinanceDetails` report.
#[derive(Clone, Debug, From)]
pub struct InvoiceLine(read::report::InvoiceRow);

/// Invoice line of a `FinanceDetails` report.
#[graphql_object(context = Context)]
impl InvoiceLine {
    /// Name of the billed `Company`, if any refers to the invoice.
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.0.company_name.as_deref()
    }

    /// Tax code of the billed `Company`, if any refers to the invoice.
    #[must_use]
    pub fn tax_code(&self) -> Option<&str> {
        self.0.tax_code.as_deref()
    }

    /// Billed amount.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.0.amount
    }

    /// First `Date` of the billed period.
    #[must_use]
    pub fn period_start(&self) -> Date {
        self.0.period_start
    }

    /// Status of the invoice.
    #[must_use]
    pub fn status(&self) -> InvoiceStatus {
        self.0.status.into()
    }
}

/// Status of an invoice.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
pub enum InvoiceStatus {
    /// Issued and awaiting payment.
    Unpaid,

    /// Paid in full.
    Paid,

    /// Unpaid past its pay day.
    Overdue,
}

impl From<domain::invoice::Status> for InvoiceStatus {
    fn from(status: domain::invoice::Status) -> Self {
        use domain::invoice::Status as S;
        match status {
            S::Unpaid => Self::Unpaid,
            S::Paid => Self::Paid,
            S::Overdue => Self::Overdue,
        }
    }
}

impl AsError for query::report::cost::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use query::report::cost::ExecutionError as E;
        match self {
            E::CompanyNotExists(_) => {
                Some(api::query::CompanyError::NotExists.into())
            }
            E::Db(e) => e.try_as_error(),
        }
    }
}
