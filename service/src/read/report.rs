//! Row projections fetched by report queries.
//!
//! These are the raw shapes the store returns; all aggregation over
//! them happens in the queries themselves.

use common::{Area, Date, Money, Rate};
use rust_decimal::Decimal;

use crate::domain::{employee, invoice, service};
#[cfg(doc)]
use crate::domain::{BuildingEmployee, Company, Office, RentContract};

/// Rent charged by one active [`RentContract`], with the rented
/// [`Office`]'s area.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RentRow {
    /// Monthly rent price of the [`RentContract`].
    pub rent_price: Money,

    /// Area of the rented [`Office`].
    pub area: Area,
}

/// Monthly usage of a building service by a [`Company`], joined with
/// the service's display fields.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthlyUsageRow {
    /// Name of the consumed service.
    pub service_name: String,

    /// Consumed quantity.
    pub quantity: Decimal,

    /// Unit price the `total` works out to per consumed unit.
    pub unit_price: Money,

    /// Total billed price of the row.
    pub total: Money,
}

impl MonthlyUsageRow {
    /// Creates a new [`MonthlyUsageRow`] out of its stored fields.
    ///
    /// The unit price is derived from the billed `total` rather than
    /// read off the service catalogue, so the line always satisfies
    /// `quantity × unit_price = total` even after the catalogue price
    /// has changed. A zero `quantity` reports the `total` itself as
    /// the unit price.
    #[must_use]
    pub fn new(service_name: String, quantity: Decimal, total: Money) -> Self {
        let unit_price = if quantity.is_zero() {
            total
        } else {
            Money::new(total.amount() / quantity)
        };
        Self {
            service_name,
            quantity,
            unit_price,
            total,
        }
    }
}

/// Daily usage of a building service by a [`Company`]'s employee.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyUsageRow {
    /// Full name of the consuming employee.
    pub employee_name: String,

    /// Name of the consumed service.
    pub service_name: String,

    /// [`Date`] of the usage.
    pub usage_date: Date,

    /// Billed price of the row.
    pub price: Money,
}

/// Subscription of a [`BuildingEmployee`] to a service role, resolved
/// down to the rewarding bonus [`Rate`].
///
/// Only subscriptions backed by an active salary rule are fetched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Subscription {
    /// ID of the subscribed [`BuildingEmployee`].
    pub employee_id: employee::Id,

    /// ID of the delivered service.
    pub service_id: service::Id,

    /// Bonus [`Rate`] rewarding the service's revenue.
    pub bonus_rate: Rate,
}

/// Invoice billed over a month, decorated with the billed [`Company`]'s
/// display fields where one can be resolved.
///
/// Every stored invoice of the month yields exactly one row, whether
/// or not any [`RentContract`] or usage record references it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvoiceRow {
    /// Name of the billed [`Company`], if resolvable.
    pub company_name: Option<String>,

    /// Tax code of the billed [`Company`], if resolvable.
    pub tax_code: Option<String>,

    /// Total billed amount of the invoice.
    pub amount: Money,

    /// First day of the billed period.
    pub period_start: Date,

    /// [`invoice::Status`] of the invoice.
    pub status: invoice::Status,
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::MonthlyUsageRow;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn unit_price_is_consistent_with_total() {
        let row =
            MonthlyUsageRow::new("Cleaning".into(), 3.into(), money("600000"));

        assert_eq!(row.unit_price, money("200000"));
        assert_eq!(
            Money::new(row.quantity * row.unit_price.amount()),
            row.total,
        );
    }

    #[test]
    fn zero_quantity_reports_total_as_unit_price() {
        let row =
            MonthlyUsageRow::new("Cleaning".into(), 0.into(), money("500000"));

        assert_eq!(row.unit_price, money("500000"));
        assert_eq!(row.total, money("500000"));
    }
}
