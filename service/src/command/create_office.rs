//! [`Command`] for creating a new [`Office`].

use common::{operations::Insert, Area, Money};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{office, Office},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Office`].
#[derive(Clone, Debug)]
pub struct CreateOffice {
    /// [`office::Name`] of the new [`Office`].
    pub name: office::Name,

    /// [`Area`] of the new [`Office`]. Must be positive.
    pub area: Area,

    /// Floor the new [`Office`] is on.
    pub floor: i32,

    /// [`office::Position`] of the new [`Office`] on its floor.
    pub position: Option<office::Position>,

    /// Monthly base rent price of the new [`Office`]. Must be positive.
    pub base_price: Money,
}

impl<Db> Command<CreateOffice> for Service<Db>
where
    Db: Database<
        Insert<office::New>,
        Ok = Office,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Office;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateOffice) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateOffice {
            name,
            area,
            floor,
            position,
            base_price,
        } = cmd;

        if area.value() <= Decimal::ZERO {
            return Err(tracerr::new!(E::NonPositiveArea(area)));
        }
        if !base_price.is_positive() {
            return Err(tracerr::new!(E::NonPositivePrice(base_price)));
        }

        self.database()
            .execute(Insert(office::New {
                name,
                area,
                floor,
                position,
                base_price,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateOffice`] [`Command`] execution.
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
}
