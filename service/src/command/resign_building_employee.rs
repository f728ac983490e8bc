//! [`Command`] for resigning a [`BuildingEmployee`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee, BuildingEmployee},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] taking a [`BuildingEmployee`] off the payroll.
///
/// The record itself is kept, so past salary reports stay reproducible.
#[derive(Clone, Copy, Debug)]
pub struct ResignBuildingEmployee {
    /// ID of the [`BuildingEmployee`] to resign.
    pub employee_id: employee::Id,
}

impl<Db> Command<ResignBuildingEmployee> for Service<Db>
where
    Db: Database<
            Select<By<Option<BuildingEmployee>, employee::Id>>,
            Ok = Option<BuildingEmployee>,
            Err = Traced<database::Error>,
        > + Database<Update<BuildingEmployee>, Err = Traced<database::Error>>,
{
    type Ok = BuildingEmployee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        ResignBuildingEmployee { employee_id }: ResignBuildingEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let mut employee = self
            .database()
            .execute(Select(By::<Option<BuildingEmployee>, _>::new(
                employee_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;

        if employee.status == employee::Status::Resigned {
            return Err(tracerr::new!(E::AlreadyResigned(employee_id)));
        }
        employee.status = employee::Status::Resigned;

        self.database()
            .execute(Update(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(employee)
    }
}

/// Error of [`ResignBuildingEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`BuildingEmployee`] has resigned already.
    #[display("`BuildingEmployee(id: {_0})` has resigned already")]
    AlreadyResigned(#[error(not(source))] employee::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`BuildingEmployee`] with the provided ID does not exist.
    #[display("`BuildingEmployee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),
}
