//! [`Query`] collection related to [`RentContract`]s.

use common::{operations::By, Slice};

use crate::{
    domain::{company, contract, RentContract},
    read,
};
#[cfg(doc)]
use crate::{domain::Office, Query};

use super::DatabaseQuery;

/// Queries a [`RentContract`] by its [`contract::Id`].
pub type ById = DatabaseQuery<By<Option<RentContract>, contract::Id>>;

/// Queries a [`Slice`] of a [`Company`]'s [`RentContract`]s (newest
/// first), each joined with the rented [`Office`]'s display fields.
///
/// [`Company`]: crate::domain::Company
pub type ByCompany =
    DatabaseQuery<By<Vec<read::contract::WithOffice>, (company::Id, Slice)>>;
