//! [`RentContract`] definitions.

use common::{define_kind, Date, Money, Period};
use derive_more::{Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use crate::domain::{company, invoice, office};
#[cfg(doc)]
use crate::domain::{Company, Office};

/// Contract renting one [`Office`] to one [`Company`] for an inclusive
/// range of days.
///
/// Invariant (enforced at write time and backed by a database exclusion
/// constraint): for a given [`Office`], terms of [`Status::Active`]
/// contracts never overlap.
#[derive(Clone, Debug)]
pub struct RentContract {
    /// ID of this [`RentContract`].
    pub id: Id,

    /// ID of the rented [`Office`].
    pub office_id: office::Id,

    /// ID of the renting [`Company`].
    pub company_id: company::Id,

    /// ID of the invoice billing this [`RentContract`], if issued.
    pub invoice_id: Option<invoice::Id>,

    /// Rented term of this [`RentContract`].
    pub term: Period,

    /// [`Date`] this [`RentContract`] was signed, if recorded.
    pub signed_date: Option<Date>,

    /// Monthly rent price of this [`RentContract`].
    pub rent_price: Money,

    /// [`Status`] of this [`RentContract`].
    pub status: Status,
}

impl RentContract {
    /// Returns whether this [`RentContract`] is [`Status::Active`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// ID of a [`RentContract`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

define_kind! {
    #[doc = "Status of a [`RentContract`]."]
    enum Status {
        #[doc = "The [`RentContract`] is in force."]
        Active = 1,

        #[doc = "The [`RentContract`] ran out its term."]
        Expired = 2,

        #[doc = "The [`RentContract`] was terminated early."]
        Terminated = 3,
    }
}

impl Status {
    /// Checks whether this [`Status`] may transition into the `to` one.
    ///
    /// The only allowed transitions are [`Active`] → [`Expired`] and
    /// [`Active`] → [`Terminated`]; both are terminal.
    ///
    /// [`Active`]: Status::Active
    /// [`Expired`]: Status::Expired
    /// [`Terminated`]: Status::Terminated
    #[must_use]
    pub fn can_transition_to(self, to: Self) -> bool {
        match self {
            Self::Active => {
                matches!(to, Self::Expired | Self::Terminated)
            }
            Self::Expired | Self::Terminated => false,
        }
    }
}

/// [`RentContract`] record to be inserted, with the ID yet to be
/// assigned by the store.
///
/// A newly created contract always starts as [`Status::Active`].
#[derive(Clone, Debug)]
pub struct New {
    /// ID of the [`Office`] to rent.
    pub office_id: office::Id,

    /// ID of the renting [`Company`].
    pub company_id: company::Id,

    /// ID of the billing invoice, if already issued.
    pub invoice_id: Option<invoice::Id>,

    /// Rented term of the new [`RentContract`].
    pub term: Period,

    /// [`Date`] the new [`RentContract`] was signed, if recorded.
    pub signed_date: Option<Date>,

    /// Monthly rent price of the new [`RentContract`].
    pub rent_price: Money,
}

/// Partial update of a [`RentContract`].
///
/// Only the provided fields are changed; the rest of the row is kept
/// as-is. Fields are fixed at compile time, so no dynamic column names
/// ever reach the store. [`Status`] transitions go through a dedicated
/// command instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct Patch {
    /// New [`Office`] ID, if the contract moves to another office.
    pub office_id: Option<office::Id>,

    /// New billing invoice ID, if changed.
    pub invoice_id: Option<invoice::Id>,

    /// New first day of the term, if changed.
    pub from_date: Option<Date>,

    /// New last day of the term, if changed.
    pub end_date: Option<Date>,

    /// New signing [`Date`], if changed.
    pub signed_date: Option<Date>,

    /// New monthly rent price, if changed.
    pub rent_price: Option<Money>,
}

impl Patch {
    /// Indicates whether applying this [`Patch`] may affect the
    /// office-availability invariant (i.e. it changes the office or
    /// the term).
    #[must_use]
    pub fn affects_availability(&self) -> bool {
        self.office_id.is_some()
            || self.from_date.is_some()
            || self.end_date.is_some()
    }

    /// Applies this [`Patch`] to the provided [`RentContract`],
    /// field-by-field.
    ///
    /// [`None`] is returned if the patched term would be inverted
    /// (end before start).
    #[must_use]
    pub fn apply_to(self, contract: &RentContract) -> Option<RentContract> {
        let Self {
            office_id,
            invoice_id,
            from_date,
            end_date,
            signed_date,
            rent_price,
        } = self;

        let term = Period::new(
            from_date.unwrap_or_else(|| contract.term.from()),
            end_date.unwrap_or_else(|| contract.term.end()),
        )?;

        Some(RentContract {
            id: contract.id,
            office_id: office_id.unwrap_or(contract.office_id),
            company_id: contract.company_id,
            invoice_id: invoice_id.or(contract.invoice_id),
            term,
            signed_date: signed_date.or(contract.signed_date),
            rent_price: rent_price.unwrap_or(contract.rent_price),
            status: contract.status,
        })
    }
}

#[cfg(test)]
mod spec {
    use common::{Money, Period};

    use super::{Patch, RentContract, Status};

    fn contract() -> RentContract {
        RentContract {
            id: 1.into(),
            office_id: 10.into(),
            company_id: 20.into(),
            invoice_id: None,
            term: Period::new(
                "2026-01-01".parse().unwrap(),
                "2026-12-31".parse().unwrap(),
            )
            .unwrap(),
            signed_date: None,
            rent_price: "20000000".parse::<Money>().unwrap(),
            status: Status::Active,
        }
    }

    #[test]
    fn status_transitions() {
        assert!(Status::Active.can_transition_to(Status::Expired));
        assert!(Status::Active.can_transition_to(Status::Terminated));
        assert!(!Status::Expired.can_transition_to(Status::Active));
        assert!(!Status::Terminated.can_transition_to(Status::Active));
        assert!(!Status::Expired.can_transition_to(Status::Terminated));
        assert!(!Status::Active.can_transition_to(Status::Active));
    }

    #[test]
    fn patch_merges_field_by_field() {
        let existing = contract();

        let patched = Patch {
            rent_price: Some("25000000".parse().unwrap()),
            ..Patch::default()
        }
        .apply_to(&existing)
        .unwrap();

        assert_eq!(patched.rent_price, "25000000".parse().unwrap());
        assert_eq!(patched.term, existing.term);
        assert_eq!(patched.office_id, existing.office_id);

        assert!(!Patch::default().affects_availability());
        assert!(Patch {
            end_date: Some("2027-06-30".parse().unwrap()),
            ..Patch::default()
        }
        .affects_availability());
    }

    #[test]
    fn patch_rejects_inverted_term() {
        let existing = contract();
        let patched = Patch {
            from_date: Some("2027-01-01".parse().unwrap()),
            ..Patch::default()
        }
        .apply_to(&existing);
        assert!(patched.is_none());
    }
}
