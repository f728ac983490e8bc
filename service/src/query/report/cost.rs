//! Monthly cost report definitions.

use common::{
    operations::{By, Select},
    Area, Money, Month,
};
use derive_more::{Display, Error, From};
use itertools::Itertools as _;
use tracerr::Traced;

use crate::{
    domain::{company, Company},
    infra::{database, Database},
    read,
    Query, Service,
};

/// [`Query`] calculating what a [`Company`] owes the building for one
/// [`Month`]: rent over its active contracts plus all service usage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthlyCost {
    /// ID of the [`Company`] to report on.
    pub company_id: company::Id,

    /// [`Month`] to report on.
    pub month: Month,
}

/// Output of the [`MonthlyCost`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// ID of the reported [`Company`].
    pub company_id: company::Id,

    /// Reported [`Month`].
    pub month: Month,

    /// Total rent over active contracts overlapping the [`Month`].
    pub rent_cost: Money,

    /// Total rented [`Area`] over those contracts.
    pub total_area: Area,

    /// Per-service cost entries, monthly usage first, then daily.
    ///
    /// A service consumed both ways yields two entries.
    pub service_costs: Vec<ServiceCost>,

    /// Sum of all [`ServiceCost`] entries.
    pub total_service_cost: Money,

    /// `rent_cost` plus `total_service_cost`.
    pub total_cost: Money,
}

/// Total cost of one service in an [`Output`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceCost {
    /// Name of the service.
    pub service_name: String,

    /// Total billed cost of the service over the [`Month`].
    pub total: Money,
}

impl<Db> Query<MonthlyCost> for Service<Db>
where
    Db: Database<
            Select<By<Option<Company>, company::Id>>,
            Ok = Option<Company>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<read::report::RentRow>, (company::Id, Month)>>,
            Ok = Vec<read::report::RentRow>,
            Err = Traced<database::Error>,
        > + Database<
            Select<
                By<Vec<read::report::MonthlyUsageRow>, (company::Id, Month)>,
            >,
            Ok = Vec<read::report::MonthlyUsageRow>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<read::report::DailyUsageRow>, (company::Id, Month)>>,
            Ok = Vec<read::report::DailyUsageRow>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        MonthlyCost { company_id, month }: MonthlyCost,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.database()
            .execute(Select(By::<Option<Company>, _>::new(company_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CompanyNotExists(company_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let (rent, monthly, daily) = futures::try_join!(
            self.database().execute(Select(
                By::<Vec<read::report::RentRow>, _>::new((company_id, month)),
            )),
            self.database().execute(Select(By::<
                Vec<read::report::MonthlyUsageRow>,
                _,
            >::new((company_id, month)))),
            self.database().execute(Select(By::<
                Vec<read::report::DailyUsageRow>,
                _,
            >::new((company_id, month)))),
        )
        .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(aggregate(company_id, month, &rent, &monthly, &daily))
    }
}

/// Folds the fetched rows into an [`Output`].
///
/// No rows at all yield an all-zero report rather than an error.
fn aggregate(
    company_id: company::Id,
    month: Month,
    rent: &[read::report::RentRow],
    monthly: &[read::report::MonthlyUsageRow],
    daily: &[read::report::DailyUsageRow],
) -> Output {
    let rent_cost = rent.iter().map(|r| r.rent_price).sum::<Money>();
    let total_area = rent.iter().map(|r| r.area).sum::<Area>();

    let service_costs = monthly
        .iter()
        .into_group_map_by(|r| r.service_name.clone())
        .into_iter()
        .map(|(service_name, rows)| ServiceCost {
            service_name,
            total: rows.into_iter().map(|r| r.total).sum(),
        })
        .sorted_by(|a, b| a.service_name.cmp(&b.service_name))
        .chain(
            daily
                .iter()
                .into_group_map_by(|r| r.service_name.clone())
                .into_iter()
                .map(|(service_name, rows)| ServiceCost {
                    service_name,
                    total: rows.into_iter().map(|r| r.price).sum(),
                })
                .sorted_by(|a, b| a.service_name.cmp(&b.service_name)),
        )
        .collect::<Vec<_>>();

    let total_service_cost =
        service_costs.iter().map(|c| c.total).sum::<Money>();

    Output {
        company_id,
        month,
        rent_cost,
        total_area,
        service_costs,
        total_service_cost,
        total_cost: rent_cost + total_service_cost,
    }
}

/// [`Query`] listing a [`Company`]'s service usage of one [`Month`]
/// line by line, without the per-service aggregation of
/// [`MonthlyCost`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServiceDetails {
    /// ID of the [`Company`] to report on.
    pub company_id: company::Id,

    /// [`Month`] to report on.
    pub month: Month,
}

/// Output of the [`ServiceDetails`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Details {
    /// Name of the reported [`Company`].
    pub company_name: String,

    /// Reported [`Month`].
    pub month: Month,

    /// Monthly usage lines (`total = quantity × unit_price`).
    pub monthly_lines: Vec<read::report::MonthlyUsageRow>,

    /// Daily usage lines of the [`Company`]'s employees.
    pub daily_lines: Vec<read::report::DailyUsageRow>,

    /// Sum of all lines' totals.
    pub total_service_cost: Money,
}

impl<Db> Query<ServiceDetails> for Service<Db>
where
    Db: Database<
            Select<By<Option<Company>, company::Id>>,
            Ok = Option<Company>,
            Err = Traced<database::Error>,
        > + Database<
            Select<
                By<Vec<read::report::MonthlyUsageRow>, (company::Id, Month)>,
            >,
            Ok = Vec<read::report::MonthlyUsageRow>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<read::report::DailyUsageRow>, (company::Id, Month)>>,
            Ok = Vec<read::report::DailyUsageRow>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Details;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        ServiceDetails { company_id, month }: ServiceDetails,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let company = self
            .database()
            .execute(Select(By::<Option<Company>, _>::new(company_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CompanyNotExists(company_id))
            .map_err(tracerr::wrap!())?;

        let (monthly_lines, daily_lines) = futures::try_join!(
            self.database().execute(Select(By::<
                Vec<read::report::MonthlyUsageRow>,
                _,
            >::new((company_id, month)))),
            self.database().execute(Select(By::<
                Vec<read::report::DailyUsageRow>,
                _,
            >::new((company_id, month)))),
        )
        .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let total_service_cost = monthly_lines
            .iter()
            .map(|l| l.total)
            .chain(daily_lines.iter().map(|l| l.price))
            .sum();

        Ok(Details {
            company_name: company.name.into(),
            month,
            monthly_lines,
            daily_lines,
            total_service_cost,
        })
    }
}

/// Error of a [`MonthlyCost`] or [`ServiceDetails`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Company`] with the provided ID does not exist.
    #[display("`Company(id: {_0})` does not exist")]
    CompanyNotExists(#[error(not(source))] company::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(test)]
mod spec {
    use common::{Month, Money};

    use crate::read::report::{DailyUsageRow, MonthlyUsageRow, RentRow};

    use super::aggregate;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn sums_monthly_and_daily_entries() {
        let month = Month::new(2026, 6).unwrap();
        let monthly = [MonthlyUsageRow {
            service_name: "Cleaning".into(),
            quantity: 1.into(),
            unit_price: money("500000"),
            total: money("500000"),
        }];
        let daily = [DailyUsageRow {
            employee_name: "An Pham".into(),
            service_name: "Cleaning".into(),
            usage_date: "2026-06-10".parse().unwrap(),
            price: money("50000"),
        }];

        let out = aggregate(1.into(), month, &[], &monthly, &daily);

        // One service consumed both ways yields two entries.
        assert_eq!(out.service_costs.len(), 2);
        assert_eq!(out.total_service_cost, money("550000"));
        assert_eq!(out.total_cost, money("550000"));
        assert_eq!(out.rent_cost, Money::ZERO);
    }

    #[test]
    fn sums_rent_over_contracts() {
        let month = Month::new(2026, 6).unwrap();
        let rent = [
            RentRow {
                rent_price: money("20000000"),
                area: "120.5".parse().unwrap(),
            },
            RentRow {
                rent_price: money("15000000"),
                area: "80".parse().unwrap(),
            },
        ];

        let out = aggregate(1.into(), month, &rent, &[], &[]);

        assert_eq!(out.rent_cost, money("35000000"));
        assert_eq!(out.total_area, "200.5".parse().unwrap());
        assert_eq!(out.total_cost, money("35000000"));
    }

    #[test]
    fn zero_data_yields_zero_report() {
        let month = Month::new(2026, 6).unwrap();
        let out = aggregate(1.into(), month, &[], &[], &[]);

        assert_eq!(out.rent_cost, Money::ZERO);
        assert_eq!(out.total_service_cost, Money::ZERO);
        assert_eq!(out.total_cost, Money::ZERO);
        assert!(out.service_costs.is_empty());
    }
}
