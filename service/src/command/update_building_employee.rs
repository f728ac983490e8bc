//! [`Command`] for updating a [`BuildingEmployee`].

use common::{
    operations::{By, Select, Update},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee, BuildingEmployee},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`BuildingEmployee`]'s personnel record.
///
/// [`employee::Status`] transitions are not part of it: resignation
/// goes through the [`ResignBuildingEmployee`] [`Command`].
///
/// [`ResignBuildingEmployee`]: super::ResignBuildingEmployee
#[derive(Clone, Debug)]
pub struct UpdateBuildingEmployee {
    /// ID of the [`BuildingEmployee`] to update.
    pub employee_id: employee::Id,

    /// [`employee::Patch`] to apply.
    pub patch: employee::Patch,
}

impl<Db> Command<UpdateBuildingEmployee> for Service<Db>
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
        UpdateBuildingEmployee { employee_id, patch }: UpdateBuildingEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if let Some(salary) = patch.base_salary {
            if !salary.is_positive() {
                return Err(tracerr::new!(E::NonPositiveSalary(salary)));
            }
        }

        let mut employee = self
            .database()
            .execute(Select(By::<Option<BuildingEmployee>, _>::new(
                employee_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;

        patch.apply_to(&mut employee);

        self.database()
            .execute(Update(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(employee)
    }
}

/// Error of [`UpdateBuildingEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`BuildingEmployee`] with the provided ID does not exist.
    #[display("`BuildingEmployee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// Provided base salary is not positive.
    #[display("Base salary must be positive, got {_0}")]
    NonPositiveSalary(#[error(not(source))] Money),
}
