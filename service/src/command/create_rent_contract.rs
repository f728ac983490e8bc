//! [`Command`] for signing a new [`RentContract`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    Date, Money, Period,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{company, contract, office, Company, Office, RentContract},
    infra::{database, Database},
    read::{self, contract::Active},
    Service,
};

use super::Command;

/// [`Command`] for signing a new [`RentContract`] over an [`Office`].
#[derive(Clone, Copy, Debug)]
pub struct CreateRentContract {
    /// ID of the [`Office`] to rent out.
    pub office_id: office::Id,

    /// ID of the renting [`Company`].
    pub company_id: company::Id,

    /// Term to rent the [`Office`] for.
    pub term: Period,

    /// [`Date`] the [`RentContract`] was signed, if recorded.
    pub signed_date: Option<Date>,

    /// Monthly rent price. Must be positive.
    pub rent_price: Money,
}

impl<Db> Command<CreateRentContract> for Service<Db>
where
    Db: Database<
            Select<By<Option<Office>, office::Id>>,
            Ok = Option<Office>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Company>, company::Id>>,
            Ok = Option<Company>,
            Err = Traced<database::Error>,
        > + Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Office, office::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Active<read::contract::Term>>, office::Id>>,
            Ok = Vec<Active<read::contract::Term>>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<contract::New>,
            Ok = RentContract,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = RentContract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateRentContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateRentContract {
            office_id,
            company_id,
            term,
            signed_date,
            rent_price,
        } = cmd;

        if !rent_price.is_positive() {
            return Err(tracerr::new!(E::NonPositivePrice(rent_price)));
        }

        self.database()
            .execute(Select(By::<Option<Office>, _>::new(office_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OfficeNotExists(office_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;
        self.database()
            .execute(Select(By::<Option<Company>, _>::new(company_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CompanyNotExists(company_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Serialize concurrent signings over the same `Office`, then
        // re-check against the freshest terms.
        tx.execute(Lock(By::new(office_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let occupied = tx
            .execute(Select(
                By::<Vec<Active<read::contract::Term>>, _>::new(office_id),
            ))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if read::contract::conflicts(&occupied, term, None) {
            return Err(tracerr::new!(E::OfficeOccupied(office_id)));
        }

        let contract = tx
            .execute(Insert(contract::New {
                office_id,
                company_id,
                invoice_id: None,
                term,
                signed_date,
                rent_price,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map_err(|e| remap_exclusion(e, office_id))?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map_err(|e| remap_exclusion(e, office_id))
            .map(drop)?;

        Ok(contract)
    }
}

/// Remaps an exclusion constraint violation into
/// [`ExecutionError::OfficeOccupied`].
///
/// The constraint is the authoritative guard behind the in-transaction
/// re-check.
fn remap_exclusion(
    e: Traced<ExecutionError>,
    office_id: office::Id,
) -> Traced<ExecutionError> {
    use ExecutionError as E;

    if matches!(e.as_ref(), E::Db(db) if db.is_exclusion_violation()) {
        tracerr::new!(E::OfficeOccupied(office_id))
    } else {
        e
    }
}

/// Error of [`CreateRentContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Company`] with the provided ID does not exist.
    #[display("`Company(id: {_0})` does not exist")]
    CompanyNotExists(#[error(not(source))] company::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided rent price is not positive.
    #[display("Rent price must be positive, got {_0}")]
    NonPositivePrice(#[error(not(source))] Money),

    /// [`Office`] is already rented out for an overlapping term.
    #[display("`Office(id: {_0})` is occupied for the requested term")]
    OfficeOccupied(#[error(not(source))] office::Id),

    /// [`Office`] with the provided ID does not exist.
    #[display("`Office(id: {_0})` does not exist")]
    OfficeNotExists(#[error(not(source))] office::Id),
}
