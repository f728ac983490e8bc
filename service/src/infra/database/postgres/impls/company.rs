//! [`Company`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{company, Company},
    infra::{
        database::{
            self,
            postgres::{Connection, FuzzPattern},
            Postgres,
        },
        Database,
    },
    query,
};

/// Columns of the `companies` table, in the order [`decode`] expects.
const COLUMNS: &str = "id, name, tax_code, email, address";

/// Decodes a [`Company`] out of a `companies` table [`Row`].
fn decode(row: &Row) -> Company {
    Company {
        id: row.get("id"),
        name: row.get("name"),
        tax_code: row.get("tax_code"),
        email: row.get("email"),
        address: row.get("address"),
    }
}

impl<C> Database<Select<By<Option<Company>, company::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Company>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Company>, company::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: company::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM companies \
             WHERE id = $1::INT4 \
             LIMIT 1",
        );
        Ok(self
            .query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| decode(&row)))
    }
}

impl<'c, C> Database<Select<By<Option<Company>, &'c company::TaxCode>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Company>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Company>, &'c company::TaxCode>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let tax_code: &company::TaxCode = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM companies \
             WHERE tax_code = $1::VARCHAR \
             LIMIT 1",
        );
        Ok(self
            .query_opt(&sql, &[&tax_code])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| decode(&row)))
    }
}

impl<C> Database<Select<By<Vec<Company>, query::company::list::Selector>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Company>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Company>, query::company::list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let query::company::list::Selector { name, slice } = by.into_inner();

        let name_pattern = name.as_deref().map(FuzzPattern::new);

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM companies \
             WHERE ($1::VARCHAR IS NULL \
                    OR LOWER(name) SIMILAR TO LOWER($1::VARCHAR)) \
             ORDER BY id \
             OFFSET $2::INT8 \
             LIMIT $3::INT8",
        );
        Ok(self
            .query(&sql, &[&name_pattern, &slice.offset, &slice.limit])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(decode)
            .collect())
    }
}

impl<C> Database<Insert<company::New>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Company;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<company::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let company::New {
            name,
            tax_code,
            email,
            address,
        } = new;

        let sql = format!(
            "INSERT INTO companies (name, tax_code, email, address) \
             VALUES (\
                 $1::VARCHAR, $2::VARCHAR, $3::VARCHAR, $4::VARCHAR \
             ) \
             RETURNING {COLUMNS}",
        );
        self.query_opt(&sql, &[&name, &tax_code, &email, &address])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| decode(&row.expect("`RETURNING` row")))
    }
}

impl<C> Database<Update<Company>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(company): Update<Company>,
    ) -> Result<Self::Ok, Self::Err> {
        let Company {
            id,
            name,
            tax_code,
            email,
            address,
        } = company;

        const SQL: &str = "\
            UPDATE companies \
            SET name = $2::VARCHAR, \
                tax_code = $3::VARCHAR, \
                email = $4::VARCHAR, \
                address = $5::VARCHAR \
            WHERE id = $1::INT4";
        self.exec(SQL, &[&id, &name, &tax_code, &email, &address])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
