//! [`Query`] collection related to [`Office`]s.

use common::{
    operations::{By, Select},
    Period, Slice,
};
use tracerr::Traced;

use crate::{
    domain::{contract, office, Office},
    infra::{database, Database},
    read::{self, contract::Active},
    Query, Service,
};

use super::DatabaseQuery;

/// Queries an [`Office`] by its [`office::Id`].
pub type ById = DatabaseQuery<By<Option<Office>, office::Id>>;

/// Queries a [`Slice`] of all [`Office`]s ordered by their ID.
pub type List = DatabaseQuery<By<Vec<Office>, Slice>>;

/// [`Query`] checking whether an [`Office`] is free to rent for the
/// whole `term`.
///
/// Fetches the office's active contract terms and evaluates the
/// interval-overlap test in process, so the check has no side effects.
/// An [`Office`] without active contracts (or a missing one) is
/// vacuously available.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Availability {
    /// ID of the [`Office`] to check.
    pub office_id: office::Id,

    /// Term the [`Office`] is wanted for.
    pub term: Period,

    /// ID of a [`RentContract`] to leave out of the check (its own
    /// term must not block rescheduling it).
    ///
    /// [`RentContract`]: crate::domain::RentContract
    pub exclude: Option<contract::Id>,
}

impl<Db> Query<Availability> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Active<read::contract::Term>>, office::Id>>,
        Ok = Vec<Active<read::contract::Term>>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = bool;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Availability { office_id, term, exclude }: Availability,
    ) -> Result<Self::Ok, Self::Err> {
        let occupied = self
            .database()
            .execute(Select(
                By::<Vec<Active<read::contract::Term>>, _>::new(office_id),
            ))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(!read::contract::conflicts(&occupied, term, exclude))
    }
}

#[cfg(test)]
mod spec {
    use common::Period;

    use crate::read::contract::{conflicts, Active, Term};

    fn period(from: &str, end: &str) -> Period {
        Period::new(from.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    fn occupied() -> Vec<Active<Term>> {
        vec![Active(Term {
            id: 7.into(),
            term: period("2026-01-01", "2026-12-31"),
        })]
    }

    #[test]
    fn detects_overlap() {
        assert!(conflicts(
            &occupied(),
            period("2026-06-01", "2026-06-30"),
            None,
        ));
        assert!(!conflicts(
            &occupied(),
            period("2027-01-01", "2027-06-30"),
            None,
        ));
    }

    #[test]
    fn excludes_own_contract() {
        // Rescheduling within one's own term must not self-conflict.
        let term = period("2026-03-01", "2026-09-30");
        assert!(conflicts(&occupied(), term, None));
        assert!(!conflicts(&occupied(), term, Some(7.into())));
        assert!(conflicts(&occupied(), term, Some(8.into())));
    }

    #[test]
    fn empty_office_is_available() {
        assert!(!conflicts(&[], period("2026-01-01", "2026-12-31"), None));
    }
}
