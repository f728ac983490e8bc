//! [`Command`] for updating a [`RentContract`].

use common::operations::{
    By, Commit, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, office, Office, RentContract},
    infra::{database, Database},
    read::{self, contract::Active},
    Service,
};
#[cfg(doc)]
use crate::domain::Company;

use super::Command;

/// [`Command`] for updating a [`RentContract`]'s terms.
///
/// The renting [`Company`] and the [`contract::Status`] never change
/// this way; the latter goes through [`TransitionContract`].
///
/// [`TransitionContract`]: super::TransitionContract
#[derive(Clone, Copy, Debug)]
pub struct UpdateRentContract {
    /// ID of the [`RentContract`] to update.
    pub contract_id: contract::Id,

    /// [`contract::Patch`] to apply.
    pub patch: contract::Patch,
}

impl<Db> Command<UpdateRentContract> for Service<Db>
where
    Db: Database<
            Select<By<Option<RentContract>, contract::Id>>,
            Ok = Option<RentContract>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Office>, office::Id>>,
            Ok = Option<Office>,
            Err = Traced<database::Error>,
        > + Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Office, office::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<RentContract>, contract::Id>>,
            Ok = Option<RentContract>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Active<read::contract::Term>>, office::Id>>,
            Ok = Vec<Active<read::contract::Term>>,
            Err = Traced<database::Error>,
        > + Database<Update<RentContract>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = RentContract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        UpdateRentContract { contract_id, patch }: UpdateRentContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let existing = self
            .database()
            .execute(Select(By::<Option<RentContract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())?;

        let target_office = patch.office_id.unwrap_or(existing.office_id);
        if patch.office_id.is_some_and(|id| id != existing.office_id) {
            self.database()
                .execute(Select(By::<Option<Office>, _>::new(target_office)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::OfficeNotExists(target_office))
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Serialize with signings over the target `Office`.
        tx.execute(Lock(By::new(target_office)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let existing = tx
            .execute(Select(By::<Option<RentContract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())?;

        let updated = patch
            .apply_to(&existing)
            .ok_or(E::InvalidPeriod)
            .map_err(tracerr::wrap!())?;

        if patch.affects_availability() && updated.is_active() {
            let occupied = tx
                .execute(Select(By::<
                    Vec<Active<read::contract::Term>>,
                    _,
                >::new(updated.office_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if read::contract::conflicts(
                &occupied,
                updated.term,
                Some(contract_id),
            ) {
                return Err(tracerr::new!(E::OfficeOccupied(
                    updated.office_id
                )));
            }
        }

        tx.execute(Update(updated.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map_err(|e| remap_exclusion(e, updated.office_id))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map_err(|e| remap_exclusion(e, updated.office_id))
            .map(drop)?;

        Ok(updated)
    }
}

/// Remaps an exclusion constraint violation into
/// [`ExecutionError::OfficeOccupied`].
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

/// Error of [`UpdateRentContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`RentContract`] with the provided ID does not exist.
    #[display("`RentContract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Patched term would end before it starts.
    #[display("Term must not end before it starts")]
    InvalidPeriod,

    /// Target [`Office`] is already rented out for the patched term.
    #[display("`Office(id: {_0})` is occupied for the requested term")]
    OfficeOccupied(#[error(not(source))] office::Id),

    /// [`Office`] with the provided ID does not exist.
    #[display("`Office(id: {_0})` does not exist")]
    OfficeNotExists(#[error(not(source))] office::Id),
}
