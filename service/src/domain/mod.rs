//! Domain entities.

pub mod company;
pub mod contract;
pub mod employee;
pub mod invoice;
pub mod office;
pub mod salary_rule;
pub mod service;

pub use self::{
    company::Company, contract::RentContract, employee::BuildingEmployee,
    office::Office,
};
