//! [`RentContract`]-related [`Database`] implementations.

use common::{
    operations::{By, Insert, Lock, Select, Update},
    Period, Slice,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{company, contract, office, RentContract},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::{self, contract::Active},
};

/// Columns of the `rent_contracts` table, in the order [`decode`]
/// expects.
const COLUMNS: &str = "\
    id, office_id, company_id, invoice_id, \
    from_date, end_date, signed_date, rent_price, status";

/// Decodes a [`RentContract`] out of a `rent_contracts` table [`Row`].
fn decode(row: &Row) -> RentContract {
    RentContract {
        id: row.get("id"),
        office_id: row.get("office_id"),
        company_id: row.get("company_id"),
        invoice_id: row.get("invoice_id"),
        term: Period::new(row.get("from_date"), row.get("end_date"))
            .expect("`from_date <= end_date` is CHECKed"),
        signed_date: row.get("signed_date"),
        rent_price: row.get("rent_price"),
        status: row.get("status"),
    }
}

impl<C> Database<Select<By<Option<RentContract>, contract::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<RentContract>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<RentContract>, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: contract::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM rent_contracts \
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

impl<C> Database<Select<By<Vec<Active<read::contract::Term>>, office::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Active<read::contract::Term>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<Active<read::contract::Term>>, office::Id>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let office_id: office::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, from_date, end_date \
            FROM rent_contracts \
            WHERE office_id = $1::INT4 \
                  AND status = $2::INT2";
        Ok(self
            .query(SQL, &[&office_id, &contract::Status::Active])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| {
                Active(read::contract::Term {
                    id: row.get("id"),
                    term: Period::new(
                        row.get("from_date"),
                        row.get("end_date"),
                    )
                    .expect("`from_date <= end_date` is CHECKed"),
                })
            })
            .collect())
    }
}

impl<C>
    Database<
        Select<By<Vec<read::contract::WithOffice>, (company::Id, Slice)>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::contract::WithOffice>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<read::contract::WithOffice>, (company::Id, Slice)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (company_id, slice) = by.into_inner();

        const SQL: &str = "\
            SELECT rc.id, rc.office_id, rc.company_id, rc.invoice_id, \
                   rc.from_date, rc.end_date, rc.signed_date, \
                   rc.rent_price, rc.status, \
                   o.name AS office_name, o.area AS office_area \
            FROM rent_contracts AS rc \
            JOIN offices AS o ON o.id = rc.office_id \
            WHERE rc.company_id = $1::INT4 \
            ORDER BY rc.from_date DESC, rc.id DESC \
            OFFSET $2::INT8 \
            LIMIT $3::INT8";
        Ok(self
            .query(SQL, &[&company_id, &slice.offset, &slice.limit])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| read::contract::WithOffice {
                contract: decode(row),
                office_name: row.get("office_name"),
                office_area: row.get("office_area"),
            })
            .collect())
    }
}

impl<C> Database<Insert<contract::New>> for Postgres<C>
where
    C: Connection,
{
    type Ok = RentContract;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<contract::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let contract::New {
            office_id,
            company_id,
            invoice_id,
            term,
            signed_date,
            rent_price,
        } = new;

        let sql = format!(
            "INSERT INTO rent_contracts (\
                 office_id, company_id, invoice_id, \
                 from_date, end_date, signed_date, rent_price, status \
             ) VALUES (\
                 $1::INT4, $2::INT4, $3::INT4, \
                 $4::DATE, $5::DATE, $6::DATE, $7::NUMERIC, $8::INT2 \
             ) \
             RETURNING {COLUMNS}",
        );
        self.query_opt(
            &sql,
            &[
                &office_id,
                &company_id,
                &invoice_id,
                &term.from(),
                &term.end(),
                &signed_date,
                &rent_price,
                &contract::Status::Active,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(|row| decode(&row.expect("`RETURNING` row")))
    }
}

impl<C> Database<Update<RentContract>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(contract): Update<RentContract>,
    ) -> Result<Self::Ok, Self::Err> {
        let RentContract {
            id,
            office_id,
            company_id,
            invoice_id,
            term,
            signed_date,
            rent_price,
            status,
        } = contract;

        const SQL: &str = "\
            UPDATE rent_contracts \
            SET office_id = $2::INT4, \
                company_id = $3::INT4, \
                invoice_id = $4::INT4, \
                from_date = $5::DATE, \
                end_date = $6::DATE, \
                signed_date = $7::DATE, \
                rent_price = $8::NUMERIC, \
                status = $9::INT2 \
            WHERE id = $1::INT4";
        self.exec(
            SQL,
            &[
                &id,
                &office_id,
                &company_id,
                &invoice_id,
                &term.from(),
                &term.end(),
                &signed_date,
                &rent_price,
                &status,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Lock<By<RentContract, contract::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<RentContract, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: contract::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM rent_contracts \
            WHERE id = $1::INT4 \
            FOR UPDATE";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
