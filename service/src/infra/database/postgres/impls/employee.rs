//! [`BuildingEmployee`]-related [`Database`] implementations.

use common::{
    operations::{By, Insert, Select, Update},
    Slice,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{employee, BuildingEmployee},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of the `building_employees` table, in the order [`decode`]
/// expects.
const COLUMNS: &str =
    "id, first_name, last_name, role, base_salary, hire_date, status";

/// Decodes a [`BuildingEmployee`] out of a `building_employees` table
/// [`Row`].
fn decode(row: &Row) -> BuildingEmployee {
    BuildingEmployee {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        role: row.get("role"),
        base_salary: row.get("base_salary"),
        hire_date: row.get("hire_date"),
        status: row.get("status"),
    }
}

impl<C> Database<Select<By<Option<BuildingEmployee>, employee::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<BuildingEmployee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<BuildingEmployee>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: employee::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM building_employees \
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

impl<C> Database<Select<By<Vec<BuildingEmployee>, Slice>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<BuildingEmployee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<BuildingEmployee>, Slice>>,
    ) -> Result<Self::Ok, Self::Err> {
        let slice: Slice = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM building_employees \
             ORDER BY id \
             OFFSET $1::INT8 \
             LIMIT $2::INT8",
        );
        Ok(self
            .query(&sql, &[&slice.offset, &slice.limit])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(decode)
            .collect())
    }
}

impl<C> Database<Select<By<Vec<BuildingEmployee>, employee::Status>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<BuildingEmployee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<BuildingEmployee>, employee::Status>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let status: employee::Status = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM building_employees \
             WHERE status = $1::INT2 \
             ORDER BY id",
        );
        Ok(self
            .query(&sql, &[&status])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(decode)
            .collect())
    }
}

impl<C> Database<Insert<employee::New>> for Postgres<C>
where
    C: Connection,
{
    type Ok = BuildingEmployee;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<employee::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let employee::New {
            first_name,
            last_name,
            role,
            base_salary,
            hire_date,
        } = new;

        let sql = format!(
            "INSERT INTO building_employees (\
                 first_name, last_name, role, \
                 base_salary, hire_date, status \
             ) \
             VALUES (\
                 $1::VARCHAR, $2::VARCHAR, $3::VARCHAR, \
                 $4::NUMERIC, $5::DATE, $6::INT2 \
             ) \
             RETURNING {COLUMNS}",
        );
        self.query_opt(
            &sql,
            &[
                &first_name,
                &last_name,
                &role,
                &base_salary,
                &hire_date,
                &employee::Status::Working,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(|row| decode(&row.expect("`RETURNING` row")))
    }
}

impl<C> Database<Update<BuildingEmployee>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(employee): Update<BuildingEmployee>,
    ) -> Result<Self::Ok, Self::Err> {
        let BuildingEmployee {
            id,
            first_name,
            last_name,
            role,
            base_salary,
            hire_date,
            status,
        } = employee;

        const SQL: &str = "\
            UPDATE building_employees \
            SET first_name = $2::VARCHAR, \
                last_name = $3::VARCHAR, \
                role = $4::VARCHAR, \
                base_salary = $5::NUMERIC, \
                hire_date = $6::DATE, \
                status = $7::INT2 \
            WHERE id = $1::INT4";
        self.exec(
            SQL,
            &[
                &id,
                &first_name,
                &last_name,
                &role,
                &base_salary,
                &hire_date,
                &status,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}
