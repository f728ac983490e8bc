//! Tenant invoice definitions.

use common::define_kind;
use derive_more::{Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// ID of a bill issued to a tenant for rent and service charges over a
/// period.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

define_kind! {
    #[doc = "Status of an invoice."]
    enum Status {
        #[doc = "The invoice awaits payment."]
        Unpaid = 1,

        #[doc = "The invoice has been paid."]
        Paid = 2,

        #[doc = "The invoice ran past its due date unpaid."]
        Overdue = 3,
    }
}
