//! Report [`Query`] definitions.
//!
//! [`Query`]: crate::Query

pub mod cost;
pub mod finance;
pub mod salary;

pub use self::{
    cost::{MonthlyCost, ServiceDetails},
    finance::{Finance, FinanceDetails},
    salary::Salaries,
};
