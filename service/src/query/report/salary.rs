//! Salary report definitions.

use std::collections::HashMap;

use common::{
    operations::{By, Select},
    Money, Month, Rate,
};
use itertools::Itertools as _;
use tracerr::Traced;

use crate::{
    domain::{employee, service, BuildingEmployee},
    infra::{database, Database},
    read,
    Query, Service,
};

/// [`Query`] calculating one [`Month`]'s payroll of the building's
/// working staff.
///
/// Each [`BuildingEmployee`] earns the base salary plus a bonus: for
/// every service subscription in force during the [`Month`], the
/// service's billed revenue of that [`Month`] times the subscription's
/// bonus [`Rate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Salaries {
    /// [`Month`] to calculate the payroll for.
    pub month: Month,
}

/// Payroll record of one [`BuildingEmployee`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// ID of the [`BuildingEmployee`].
    pub employee_id: employee::Id,

    /// Full name of the [`BuildingEmployee`].
    pub full_name: String,

    /// [`employee::Role`] of the [`BuildingEmployee`].
    pub role: employee::Role,

    /// Fixed monthly base salary.
    pub base_salary: Money,

    /// Highest bonus [`Rate`] among the [`BuildingEmployee`]'s
    /// subscriptions, or zero without any.
    ///
    /// The earned bonus itself is accrued per subscription, each at
    /// its own [`Rate`].
    pub bonus_rate: Rate,

    /// Billed revenue of the subscribed services over the [`Month`].
    pub monthly_revenue: Money,

    /// `base_salary` plus the earned bonus. Never below `base_salary`.
    pub total_salary: Money,
}

impl<Db> Query<Salaries> for Service<Db>
where
    Db: Database<
            Select<By<Vec<BuildingEmployee>, employee::Status>>,
            Ok = Vec<BuildingEmployee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<read::report::Subscription>, Month>>,
            Ok = Vec<read::report::Subscription>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<HashMap<service::Id, Money>, Month>>,
            Ok = HashMap<service::Id, Money>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Vec<Record>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Salaries { month }: Salaries,
    ) -> Result<Self::Ok, Self::Err> {
        let (employees, subscriptions, revenue) = futures::try_join!(
            self.database().execute(Select(
                By::<Vec<BuildingEmployee>, _>::new(employee::Status::Working),
            )),
            self.database().execute(Select(By::<
                Vec<read::report::Subscription>,
                _,
            >::new(month))),
            self.database().execute(Select(
                By::<HashMap<service::Id, Money>, _>::new(month),
            )),
        )
        .map_err(tracerr::wrap!())?;

        Ok(compute(employees, &subscriptions, &revenue))
    }
}

/// Folds the fetched rows into payroll [`Record`]s, one per employee.
///
/// An employee without subscriptions gets a zero rate and revenue, so
/// the total never drops below the base salary.
fn compute(
    employees: Vec<BuildingEmployee>,
    subscriptions: &[read::report::Subscription],
    revenue: &HashMap<service::Id, Money>,
) -> Vec<Record> {
    let by_employee = subscriptions
        .iter()
        .into_group_map_by(|s| s.employee_id);

    employees
        .into_iter()
        .map(|e| {
            let subs = by_employee.get(&e.id).map_or(&[][..], Vec::as_slice);

            // Rules may differ per service even for one role, so the
            // record reports the highest rate; the bonus itself is
            // summed per subscription below.
            let bonus_rate = subs
                .iter()
                .map(|s| s.bonus_rate)
                .max()
                .unwrap_or(Rate::ZERO);
            let monthly_revenue = subs
                .iter()
                .map(|s| {
                    revenue.get(&s.service_id).copied().unwrap_or_default()
                })
                .sum::<Money>();
            let bonus = subs
                .iter()
                .map(|s| {
                    revenue.get(&s.service_id).copied().unwrap_or_default()
                        * s.bonus_rate
                })
                .sum::<Money>();

            Record {
                employee_id: e.id,
                full_name: e.full_name(),
                role: e.role.clone(),
                base_salary: e.base_salary,
                bonus_rate,
                monthly_revenue,
                total_salary: e.base_salary + bonus,
            }
        })
        .collect()
}

#[cfg(test)]
mod spec {
    use std::collections::HashMap;

    use common::{Money, Rate};

    use crate::{
        domain::{employee, service, BuildingEmployee},
        read::report::Subscription,
    };

    use super::compute;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn employee(id: i32, base_salary: &str) -> BuildingEmployee {
        BuildingEmployee {
            id: id.into(),
            first_name: "Minh".into(),
            last_name: "Tran".into(),
            role: "technician".parse().unwrap(),
            base_salary: money(base_salary),
            hire_date: "2024-03-01".parse().unwrap(),
            status: employee::Status::Working,
        }
    }

    fn revenue(entries: &[(i32, &str)]) -> HashMap<service::Id, Money> {
        entries
            .iter()
            .map(|&(id, amount)| (service::Id::from(id), money(amount)))
            .collect()
    }

    #[test]
    fn adds_revenue_bonus_to_base_salary() {
        let subs = [Subscription {
            employee_id: 1.into(),
            service_id: 9.into(),
            bonus_rate: Rate::new("0.05".parse().unwrap()).unwrap(),
        }];
        let records = compute(
            vec![employee(1, "10000000")],
            &subs,
            &revenue(&[(9, "2000000")]),
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].monthly_revenue, money("2000000"));
        assert_eq!(records[0].total_salary, money("10100000"));
    }

    #[test]
    fn no_subscription_means_base_salary_only() {
        let records =
            compute(vec![employee(1, "8000000")], &[], &revenue(&[]));

        assert_eq!(records[0].bonus_rate, Rate::ZERO);
        assert_eq!(records[0].monthly_revenue, Money::ZERO);
        assert_eq!(records[0].total_salary, money("8000000"));
    }

    #[test]
    fn total_never_drops_below_base() {
        let subs = [Subscription {
            employee_id: 1.into(),
            service_id: 9.into(),
            bonus_rate: Rate::new("0.1".parse().unwrap()).unwrap(),
        }];
        // Subscribed service with no billed revenue this month.
        let records =
            compute(vec![employee(1, "8000000")], &subs, &revenue(&[]));

        assert!(records[0].total_salary >= records[0].base_salary);
        assert_eq!(records[0].total_salary, money("8000000"));
    }

    #[test]
    fn sums_bonus_over_multiple_subscriptions() {
        let subs = [
            Subscription {
                employee_id: 1.into(),
                service_id: 9.into(),
                bonus_rate: Rate::new("0.05".parse().unwrap()).unwrap(),
            },
            Subscription {
                employee_id: 1.into(),
                service_id: 10.into(),
                bonus_rate: Rate::new("0.05".parse().unwrap()).unwrap(),
            },
        ];
        let records = compute(
            vec![employee(1, "10000000")],
            &subs,
            &revenue(&[(9, "1000000"), (10, "3000000")]),
        );

        assert_eq!(records[0].monthly_revenue, money("4000000"));
        assert_eq!(records[0].total_salary, money("10200000"));
    }

    #[test]
    fn reports_highest_rate_regardless_of_row_order() {
        let low = Subscription {
            employee_id: 1.into(),
            service_id: 9.into(),
            bonus_rate: Rate::new("0.02".parse().unwrap()).unwrap(),
        };
        let high = Subscription {
            employee_id: 1.into(),
            service_id: 10.into(),
            bonus_rate: Rate::new("0.1".parse().unwrap()).unwrap(),
        };
        let rev = revenue(&[(9, "1000000"), (10, "2000000")]);

        for subs in [[low, high], [high, low]] {
            let records =
                compute(vec![employee(1, "10000000")], &subs, &rev);

            assert_eq!(
                records[0].bonus_rate,
                Rate::new("0.1".parse().unwrap()).unwrap(),
            );
            // 1000000 * 0.02 + 2000000 * 0.1.
            assert_eq!(records[0].total_salary, money("10220000"));
        }
    }
}
