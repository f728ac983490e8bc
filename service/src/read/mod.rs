//! Read entities definitions.

pub mod contract;
pub mod report;
