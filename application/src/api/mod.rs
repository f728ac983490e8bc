//! GraphQL API definitions.

pub mod company;
pub mod contract;
pub mod employee;
mod mutation;
pub mod office;
mod query;
pub mod report;
pub mod scalar;

pub use self::{
    company::Company, contract::Contract, employee::BuildingEmployee,
    mutation::Mutation, office::Office, query::Query,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    Mutation,
    juniper::EmptySubscription<crate::Context>,
>;
