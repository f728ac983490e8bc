//! [`Command`] for updating an [`Office`].

use common::{
    operations::{By, Select, Update},
    Area, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{office, Office},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an [`Office`]'s registered details.
#[derive(Clone, Debug)]
pub struct UpdateOffice {
    /// ID of the [`Office`] to update.
    pub office_id: office::Id,

    /// [`office::Patch`] to apply.
    pub patch: office::Patch,
}

impl<Db> Command<UpdateOffice> for Service<Db>
where
    Db: Database<
            Select<By<Option<Office>, office::Id>>,
            Ok = Option<Office>,
            Err = Traced<database::Error>,
        > + Database<Update<Office>, Err = Traced<database::Error>>,
{
    type Ok = Office;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        UpdateOffice { office_id, patch }: UpdateOffice,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if let Some(area) = patch.area {
            if area.value() <= Decimal::ZERO {
                return Err(tracerr::new!(E::NonPositiveArea(area)));
            }
        }
        if let Some(price) = patch.base_price {
            if !price.is_positive() {
                return Err(tracerr::new!(E::NonPositivePrice(price)));
            }
        }

        let mut office = self
            .database()
            .execute(Select(By::<Option<Office>, _>::new(office_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OfficeNotExists(office_id))
            .map_err(tracerr::wrap!())?;

        patch.apply_to(&mut office);

        self.database()
            .execute(Update(office.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(office)
    }
}

/// Error of [`UpdateOffice`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided [`Area`] is not positive.
    #[display("`Area` must be positive, got {_0}")]
    NonPositiveArea(#[error(not(source))] Area),

    /// Provided base price is not positive.
    #[display("Base price must be positive, got {_0}")]
    NonPositivePrice(#[error(not(source))] Money),

    /// [`Office`] with the provided ID does not exist.
    #[display("`Office(id: {_0})` does not exist")]
    OfficeNotExists(#[error(not(source))] office::Id),
}
