//! [`Command`] for closing out a [`RentContract`].

use common::operations::{
    By, Commit, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, RentContract},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] transitioning a [`RentContract`] out of its active
/// state, either expiring or terminating it.
#[derive(Clone, Copy, Debug)]
pub struct TransitionContract {
    /// ID of the [`RentContract`] to transition.
    pub contract_id: contract::Id,

    /// [`contract::Status`] to transition into.
    pub to: contract::Status,
}

impl<Db> Command<TransitionContract> for Service<Db>
where
    Db: Database<
            Select<By<Option<RentContract>, contract::Id>>,
            Ok = Option<RentContract>,
            Err = Traced<database::Error>,
        > + Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<RentContract, contract::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<RentContract>, contract::Id>>,
            Ok = Option<RentContract>,
            Err = Traced<database::Error>,
        > + Database<Update<RentContract>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = RentContract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        TransitionContract { contract_id, to }: TransitionContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.database()
            .execute(Select(By::<Option<RentContract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent transitions of the same `RentContract`.
        tx.execute(Lock(By::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut contract = tx
            .execute(Select(By::<Option<RentContract>, _>::new(contract_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())?;

        if !contract.status.can_transition_to(to) {
            return Err(tracerr::new!(E::InvalidTransition {
                from: contract.status,
                to,
            }));
        }
        contract.status = to;

        tx.execute(Update(contract.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(contract)
    }
}

/// Error of [`TransitionContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`RentContract`] with the provided ID does not exist.
    #[display("`RentContract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Requested [`contract::Status`] transition is not allowed.
    #[display("Cannot transition a {from} `RentContract` into {to}")]
    InvalidTransition {
        /// Current [`contract::Status`] of the [`RentContract`].
        from: contract::Status,

        /// Requested [`contract::Status`].
        to: contract::Status,
    },
}
