//! [`Query`] collection related to [`Company`]s.

use common::operations::By;
#[cfg(doc)]
use common::Slice;

use crate::domain::{company, Company};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Company`] by its [`company::Id`].
pub type ById = DatabaseQuery<By<Option<Company>, company::Id>>;

/// Queries a [`Slice`] of [`Company`]s matching a [`list::Selector`].
pub type List = DatabaseQuery<By<Vec<Company>, list::Selector>>;

pub mod list {
    //! [`Company`]s list definitions.

    use common::Slice;

    /// Selection arguments of a [`Company`]s list.
    ///
    /// [`Company`]: crate::domain::Company
    #[derive(Clone, Debug, Default)]
    pub struct Selector {
        /// [`Company`] name (or its part) to fuzzy search for.
        ///
        /// [`Company`]: crate::domain::Company
        pub name: Option<String>,

        /// [`Slice`] of the list to return.
        pub slice: Slice,
    }
}
