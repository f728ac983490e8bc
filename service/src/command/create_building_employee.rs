//! [`Command`] for hiring a new [`BuildingEmployee`].

use common::{operations::Insert, Date, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee, BuildingEmployee},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for hiring a new [`BuildingEmployee`].
///
/// The new employee always starts as [`employee::Status::Working`].
#[derive(Clone, Debug)]
pub struct CreateBuildingEmployee {
    /// First name of the new [`BuildingEmployee`].
    pub first_name: String,

    /// Last name of the new [`BuildingEmployee`].
    pub last_name: String,

    /// [`employee::Role`] of the new [`BuildingEmployee`].
    pub role: employee::Role,

    /// Monthly base salary of the new [`BuildingEmployee`]. Must be
    /// positive.
    pub base_salary: Money,

    /// [`Date`] the new [`BuildingEmployee`] was hired.
    pub hire_date: Date,
}

impl<Db> Command<CreateBuildingEmployee> for Service<Db>
where
    Db: Database<
        Insert<employee::New>,
        Ok = BuildingEmployee,
        Err = Traced<database::Error>,
    >,
{
    type Ok = BuildingEmployee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateBuildingEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBuildingEmployee {
            first_name,
            last_name,
            role,
            base_salary,
            hire_date,
        } = cmd;

        if !base_salary.is_positive() {
            return Err(tracerr::new!(E::NonPositiveSalary(base_salary)));
        }

        self.database()
            .execute(Insert(employee::New {
                first_name,
                last_name,
                role,
                base_salary,
                hire_date,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateBuildingEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided base salary is not positive.
    #[display("Base salary must be positive, got {_0}")]
    NonPositiveSalary(#[error(not(source))] Money),
}
