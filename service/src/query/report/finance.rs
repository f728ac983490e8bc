//! Building finance report definitions.

use std::cmp::Reverse;

use common::{
    operations::{By, Select},
    Money, Month,
};
use itertools::Itertools as _;
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    infra::{database, Database},
    read,
    Query, Service,
};
#[cfg(doc)]
use crate::domain::BuildingEmployee;

use super::salary::{self, Salaries};

/// Share of the total revenue attributed to rent in the breakdown
/// [`Estimate`]; the rest is attributed to services.
const RENT_REVENUE_SHARE: Decimal = Decimal::from_parts(65, 0, 0, false, 2);

/// [`Query`] summarizing the whole building's finances for one
/// [`Month`]: billed revenue, payroll expense and the resulting net.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Finance {
    /// [`Month`] to report on.
    pub month: Month,
}

/// Output of the [`Finance`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Summary {
    /// Reported [`Month`].
    pub month: Month,

    /// Total amount of invoices billed over the [`Month`].
    pub total_revenue: Money,

    /// Total bonus-inclusive payroll of working [`BuildingEmployee`]s.
    pub total_expense: Money,

    /// `total_revenue` minus `total_expense`. May be negative.
    pub net_profit: Money,

    /// Rent/services breakdown [`Estimate`] of the revenue.
    pub revenue_estimate: Estimate,
}

/// Rough rent/services breakdown of the total revenue.
///
/// A fixed 65/35 split, not a measurement: invoices don't itemize rent
/// against services, so this is only indicative.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Estimate {
    /// Revenue share attributed to rent.
    pub rent: Money,

    /// Revenue share attributed to services.
    pub services: Money,
}

impl<Db> Query<Finance> for Service<Db>
where
    Db: Database<
        Select<By<Vec<read::report::InvoiceRow>, Month>>,
        Ok = Vec<read::report::InvoiceRow>,
        Err = Traced<database::Error>,
    >,
    Self: Query<
        Salaries,
        Ok = Vec<salary::Record>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Summary;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Finance { month }: Finance,
    ) -> Result<Self::Ok, Self::Err> {
        let (invoices, payroll) = futures::try_join!(
            self.database().execute(Select(
                By::<Vec<read::report::InvoiceRow>, _>::new(month),
            )),
            Query::<Salaries>::execute(self, Salaries { month }),
        )
        .map_err(tracerr::wrap!())?;

        Ok(summarize(month, &invoices, &payroll))
    }
}

/// Folds the fetched rows into a [`Summary`].
fn summarize(
    month: Month,
    invoices: &[read::report::InvoiceRow],
    payroll: &[salary::Record],
) -> Summary {
    let total_revenue = invoices.iter().map(|i| i.amount).sum::<Money>();
    let total_expense = payroll.iter().map(|r| r.total_salary).sum::<Money>();

    let rent = total_revenue * RENT_REVENUE_SHARE;
    Summary {
        month,
        total_revenue,
        total_expense,
        net_profit: total_revenue - total_expense,
        revenue_estimate: Estimate {
            rent,
            services: total_revenue - rent,
        },
    }
}

/// [`Query`] producing the [`Finance`] [`Summary`] along with the
/// rows behind it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FinanceDetails {
    /// [`Month`] to report on.
    pub month: Month,
}

/// Output of the [`FinanceDetails`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Details {
    /// The same [`Summary`] the [`Finance`] [`Query`] produces.
    pub summary: Summary,

    /// Billed invoices, newest period first.
    pub revenue_rows: Vec<read::report::InvoiceRow>,

    /// Payroll records, most expensive first.
    pub expense_rows: Vec<salary::Record>,
}

impl<Db> Query<FinanceDetails> for Service<Db>
where
    Db: Database<
        Select<By<Vec<read::report::InvoiceRow>, Month>>,
        Ok = Vec<read::report::InvoiceRow>,
        Err = Traced<database::Error>,
    >,
    Self: Query<
        Salaries,
        Ok = Vec<salary::Record>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Details;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        FinanceDetails { month }: FinanceDetails,
    ) -> Result<Self::Ok, Self::Err> {
        let (invoices, payroll) = futures::try_join!(
            self.database().execute(Select(
                By::<Vec<read::report::InvoiceRow>, _>::new(month),
            )),
            Query::<Salaries>::execute(self, Salaries { month }),
        )
        .map_err(tracerr::wrap!())?;

        let summary = summarize(month, &invoices, &payroll);
        Ok(Details {
            summary,
            revenue_rows: invoices
                .into_iter()
                .sorted_by_key(|i| Reverse(i.period_start))
                .collect(),
            expense_rows: payroll
                .into_iter()
                .sorted_by_key(|r| Reverse(r.total_salary))
                .collect(),
        })
    }
}

#[cfg(test)]
mod spec {
    use common::{Money, Month, Rate};

    use crate::{
        domain::invoice,
        read::report::InvoiceRow,
    };

    use super::{salary, summarize};

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn invoice(amount: &str, period_start: &str) -> InvoiceRow {
        InvoiceRow {
            company_name: Some("Acme Ltd".into()),
            tax_code: Some("0312345678".into()),
            amount: money(amount),
            period_start: period_start.parse().unwrap(),
            status: invoice::Status::Unpaid,
        }
    }

    fn record(total_salary: &str) -> salary::Record {
        salary::Record {
            employee_id: 1.into(),
            full_name: "Minh Tran".into(),
            role: "technician".parse().unwrap(),
            base_salary: money("8000000"),
            bonus_rate: Rate::ZERO,
            monthly_revenue: Money::ZERO,
            total_salary: money(total_salary),
        }
    }

    #[test]
    fn net_profit_identity() {
        let month = Month::new(2026, 6).unwrap();
        let out = summarize(
            month,
            &[
                invoice("30000000", "2026-06-01"),
                invoice("5000000", "2026-06-01"),
            ],
            &[record("9000000"), record("8000000")],
        );

        assert_eq!(out.total_revenue, money("35000000"));
        assert_eq!(out.total_expense, money("17000000"));
        assert_eq!(out.net_profit, out.total_revenue - out.total_expense);
        assert_eq!(out.net_profit, money("18000000"));
    }

    #[test]
    fn estimate_splits_revenue_without_loss() {
        let month = Month::new(2026, 6).unwrap();
        let out = summarize(month, &[invoice("10000001", "2026-06-01")], &[]);

        assert_eq!(
            out.revenue_estimate.rent + out.revenue_estimate.services,
            out.total_revenue,
        );
        assert_eq!(out.revenue_estimate.rent, money("6500000.65"));
    }

    #[test]
    fn counts_invoices_without_a_billed_company() {
        let month = Month::new(2026, 6).unwrap();
        let orphan = InvoiceRow {
            company_name: None,
            tax_code: None,
            ..invoice("4000000", "2026-06-15")
        };
        let out = summarize(
            month,
            &[invoice("30000000", "2026-06-01"), orphan],
            &[],
        );

        assert_eq!(out.total_revenue, money("34000000"));
    }

    #[test]
    fn expense_may_exceed_revenue() {
        let month = Month::new(2026, 6).unwrap();
        let out = summarize(month, &[], &[record("9000000")]);

        assert!(out.net_profit.is_negative());
        assert_eq!(out.net_profit, money("-9000000"));
    }
}
