//! [`Command`] definition.

pub mod create_building_employee;
pub mod create_company;
pub mod create_office;
pub mod create_rent_contract;
pub mod resign_building_employee;
pub mod transition_contract;
pub mod update_building_employee;
pub mod update_company;
pub mod update_office;
pub mod update_rent_contract;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_building_employee::CreateBuildingEmployee,
    create_company::CreateCompany, create_office::CreateOffice,
    create_rent_contract::CreateRentContract,
    resign_building_employee::ResignBuildingEmployee,
    transition_contract::TransitionContract,
    update_building_employee::UpdateBuildingEmployee,
    update_company::UpdateCompany, update_office::UpdateOffice,
    update_rent_contract::UpdateRentContract,
};
