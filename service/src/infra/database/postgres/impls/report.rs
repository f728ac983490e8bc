//! Report-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Select},
    Money, Month,
};
use tracerr::Traced;

use crate::{
    domain::{company, contract, salary_rule, service},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

impl<C> Database<Select<By<Vec<read::report::RentRow>, (company::Id, Month)>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::report::RentRow>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<read::report::RentRow>, (company::Id, Month)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (company_id, month) = by.into_inner();

        const SQL: &str = "\
            SELECT rc.rent_price, o.area \
            FROM rent_contracts AS rc \
            JOIN offices AS o ON o.id = rc.office_id \
            WHERE rc.company_id = $1::INT4 \
                  AND rc.status = $2::INT2 \
                  AND rc.from_date <= $4::DATE \
                  AND rc.end_date >= $3::DATE";
        Ok(self
            .query(
                SQL,
                &[
                    &company_id,
                    &contract::Status::Active,
                    &month.first_day(),
                    &month.last_day(),
                ],
            )
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| read::report::RentRow {
                rent_price: row.get("rent_price"),
                area: row.get("area"),
            })
            .collect())
    }
}

impl<C>
    Database<
        Select<By<Vec<read::report::MonthlyUsageRow>, (company::Id, Month)>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::report::MonthlyUsageRow>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<read::report::MonthlyUsageRow>, (company::Id, Month)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (company_id, month) = by.into_inner();

        const SQL: &str = "\
            SELECT s.name AS service_name, \
                   cmu.quantity, \
                   cmu.price AS total \
            FROM company_monthly_usages AS cmu \
            JOIN services AS s ON s.id = cmu.service_id \
            WHERE cmu.company_id = $1::INT4 \
                  AND cmu.from_date >= $2::DATE \
                  AND cmu.from_date <= $3::DATE \
            ORDER BY s.name, cmu.id";
        Ok(self
            .query(SQL, &[&company_id, &month.first_day(), &month.last_day()])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| {
                read::report::MonthlyUsageRow::new(
                    row.get("service_name"),
                    row.get("quantity"),
                    row.get("total"),
                )
            })
            .collect())
    }
}

impl<C>
    Database<
        Select<By<Vec<read::report::DailyUsageRow>, (company::Id, Month)>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::report::DailyUsageRow>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<read::report::DailyUsageRow>, (company::Id, Month)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (company_id, month) = by.into_inner();

        const SQL: &str = "\
            SELECT ce.first_name || ' ' || ce.last_name AS employee_name, \
                   s.name AS service_name, \
                   edu.usage_date, \
                   edu.price \
            FROM employee_daily_usages AS edu \
            JOIN company_employees AS ce ON ce.id = edu.employee_id \
            JOIN services AS s ON s.id = edu.service_id \
            WHERE ce.company_id = $1::INT4 \
                  AND edu.usage_date >= $2::DATE \
                  AND edu.usage_date <= $3::DATE \
            ORDER BY edu.usage_date, edu.id";
        Ok(self
            .query(SQL, &[&company_id, &month.first_day(), &month.last_day()])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| read::report::DailyUsageRow {
                employee_name: row.get("employee_name"),
                service_name: row.get("service_name"),
                usage_date: row.get("usage_date"),
                price: row.get("price"),
            })
            .collect())
    }
}

impl<C> Database<Select<By<Vec<read::report::Subscription>, Month>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::report::Subscription>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::report::Subscription>, Month>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let month: Month = by.into_inner();

        const SQL: &str = "\
            SELECT ss.employee_id, srr.service_id, sr.bonus_rate \
            FROM service_subscribers AS ss \
            JOIN service_role_rules AS srr ON srr.id = ss.role_rule_id \
            JOIN salary_rules AS sr ON sr.id = srr.salary_rule_id \
            WHERE sr.status = $1::INT2 \
                  AND ss.from_date <= $3::DATE \
                  AND (ss.end_date IS NULL OR ss.end_date >= $2::DATE) \
            ORDER BY ss.employee_id, ss.id";
        Ok(self
            .query(
                SQL,
                &[
                    &salary_rule::Status::Active,
                    &month.first_day(),
                    &month.last_day(),
                ],
            )
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| read::report::Subscription {
                employee_id: row.get("employee_id"),
                service_id: row.get("service_id"),
                bonus_rate: row.get("bonus_rate"),
            })
            .collect())
    }
}

impl<C> Database<Select<By<HashMap<service::Id, Money>, Month>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = HashMap<service::Id, Money>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<service::Id, Money>, Month>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let month: Month = by.into_inner();

        const SQL: &str = "\
            SELECT cmu.service_id, SUM(cmu.price) AS revenue \
            FROM company_monthly_usages AS cmu \
            WHERE cmu.from_date >= $1::DATE \
                  AND cmu.from_date <= $2::DATE \
            GROUP BY cmu.service_id";
        Ok(self
            .query(SQL, &[&month.first_day(), &month.last_day()])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| (row.get("service_id"), row.get("revenue")))
            .collect())
    }
}

impl<C> Database<Select<By<Vec<read::report::InvoiceRow>, Month>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::report::InvoiceRow>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::report::InvoiceRow>, Month>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let month: Month = by.into_inner();

        // Revenue sums over the bare `invoices` table: the company is
        // only a decoration, resolved through whichever contract or
        // usage record references the invoice, deduplicated so every
        // invoice yields exactly one row.
        const SQL: &str = "\
            SELECT c.name AS company_name, \
                   c.tax_code, \
                   i.total_amount AS amount, \
                   i.from_date AS period_start, \
                   i.status \
            FROM invoices AS i \
            LEFT JOIN (\
                SELECT DISTINCT ON (invoice_id) invoice_id, company_id \
                FROM (\
                    SELECT invoice_id, company_id, 1 AS source \
                    FROM rent_contracts \
                    WHERE invoice_id IS NOT NULL \
                    UNION ALL \
                    SELECT invoice_id, company_id, 2 \
                    FROM company_monthly_usages \
                    WHERE invoice_id IS NOT NULL \
                ) AS refs \
                ORDER BY invoice_id, source \
            ) AS billed ON billed.invoice_id = i.id \
            LEFT JOIN companies AS c ON c.id = billed.company_id \
            WHERE i.from_date >= $1::DATE \
                  AND i.from_date <= $2::DATE \
            ORDER BY i.from_date DESC, i.id DESC";
        Ok(self
            .query(SQL, &[&month.first_day(), &month.last_day()])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| read::report::InvoiceRow {
                company_name: row.get("company_name"),
                tax_code: row.get("tax_code"),
                amount: row.get("amount"),
                period_start: row.get("period_start"),
                status: row.get("status"),
            })
            .collect())
    }
}
