//! [`Query`] collection related to [`BuildingEmployee`]s.
//!
//! [`Query`]: super::Query

use common::{operations::By, Slice};

use crate::domain::{employee, BuildingEmployee};

use super::DatabaseQuery;

/// Queries a [`BuildingEmployee`] by its [`employee::Id`].
pub type ById = DatabaseQuery<By<Option<BuildingEmployee>, employee::Id>>;

/// Queries a [`Slice`] of all [`BuildingEmployee`]s ordered by their
/// ID.
pub type List = DatabaseQuery<By<Vec<BuildingEmployee>, Slice>>;
