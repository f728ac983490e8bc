//! [`RentContract`] read models definitions.

use common::{Area, Period};

use crate::domain::{contract, office};
#[cfg(doc)]
use crate::domain::{Office, RentContract};

/// Wrapper around a read model indicating that only
/// [`contract::Status::Active`] rows were considered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Active<T>(pub T);

/// Term of an active [`RentContract`] occupying an [`Office`].
///
/// The minimal projection the availability check needs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Term {
    /// ID of the [`RentContract`].
    pub id: contract::Id,

    /// Rented term of the [`RentContract`].
    pub term: Period,
}

/// Checks whether the wanted `term` overlaps any of the `occupied`
/// ones, not counting the `exclude`d contract.
///
/// The single formula behind [`Period::overlaps`] subsumes all three
/// containment cases, so one pass over the occupied terms suffices.
#[must_use]
pub fn conflicts(
    occupied: &[Active<Term>],
    term: Period,
    exclude: Option<contract::Id>,
) -> bool {
    occupied
        .iter()
        .filter(|Active(t)| exclude != Some(t.id))
        .any(|Active(t)| t.term.overlaps(&term))
}

/// [`RentContract`] joined with the rented [`Office`]'s display fields,
/// for per-company contract listings.
#[derive(Clone, Debug)]
pub struct WithOffice {
    /// The [`RentContract`] itself.
    pub contract: contract::RentContract,

    /// Name of the rented [`Office`].
    pub office_name: office::Name,

    /// Area of the rented [`Office`].
    pub office_area: Area,
}
