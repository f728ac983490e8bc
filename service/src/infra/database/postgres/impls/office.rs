//! [`Office`]-related [`Database`] implementations.

use common::{
    operations::{By, Insert, Lock, Select, Update},
    Slice,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{office, Office},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of the `offices` table, in the order [`decode`] expects.
const COLUMNS: &str = "id, name, area, floor, position, base_price";

/// Decodes an [`Office`] out of a `offices` table [`Row`].
fn decode(row: &Row) -> Office {
    Office {
        id: row.get("id"),
        name: row.get("name"),
        area: row.get("area"),
        floor: row.get("floor"),
        position: row.get("position"),
        base_price: row.get("base_price"),
    }
}

impl<C> Database<Select<By<Option<Office>, office::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Office>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Office>, office::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: office::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM offices \
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

impl<C> Database<Select<By<Vec<Office>, Slice>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Office>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Office>, Slice>>,
    ) -> Result<Self::Ok, Self::Err> {
        let slice: Slice = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM offices \
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

impl<C> Database<Insert<office::New>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Office;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<office::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let office::New {
            name,
            area,
            floor,
            position,
            base_price,
        } = new;

        let sql = format!(
            "INSERT INTO offices (name, area, floor, position, base_price) \
             VALUES (\
                 $1::VARCHAR, $2::NUMERIC, $3::INT4, \
                 $4::VARCHAR, $5::NUMERIC \
             ) \
             RETURNING {COLUMNS}",
        );
        self.query_opt(&sql, &[&name, &area, &floor, &position, &base_price])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| decode(&row.expect("`RETURNING` row")))
    }
}

impl<C> Database<Update<Office>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(office): Update<Office>,
    ) -> Result<Self::Ok, Self::Err> {
        let Office {
            id,
            name,
            area,
            floor,
            position,
            base_price,
        } = office;

        const SQL: &str = "\
            UPDATE offices \
            SET name = $2::VARCHAR, \
                area = $3::NUMERIC, \
                floor = $4::INT4, \
                position = $5::VARCHAR, \
                base_price = $6::NUMERIC \
            WHERE id = $1::INT4";
        self.exec(SQL, &[&id, &name, &area, &floor, &position, &base_price])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Lock<By<Office, office::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Office, office::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: office::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM offices \
            WHERE id = $1::INT4 \
            FOR UPDATE";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
