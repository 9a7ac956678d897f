use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rentora_catalog::Item;
use rentora_core::{CustomerId, Entity, ItemId, RentalId};
use rentora_customers::Customer;

/// Denormalized copy of customer fields, captured at rental-open time.
///
/// Subsequent customer edits do not affect historical rentals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub is_gold: bool,
}

impl From<&Customer> for CustomerSnapshot {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.customer_id(),
            name: c.name().to_string(),
            phone: c.phone().to_string(),
            is_gold: c.is_gold(),
        }
    }
}

/// Denormalized copy of item fields, captured at rental-open time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub name: String,
    pub daily_rate: f64,
}

impl From<&Item> for ItemSnapshot {
    fn from(i: &Item) -> Self {
        Self {
            id: i.item_id(),
            name: i.name().to_string(),
            daily_rate: i.daily_rate(),
        }
    }
}

/// Error for a second close attempt on an already-settled rental.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("return already processed")]
pub struct AlreadyReturned;

/// A rental record: a customer, an item, and an open/closed time interval.
///
/// Invariants:
/// - `returned_at` is set at most once (one-shot transition);
/// - `fee` is present iff `returned_at` is present, and is never negative;
/// - a rental is never mutated after closing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    id: RentalId,
    customer: CustomerSnapshot,
    item: ItemSnapshot,
    opened_at: DateTime<Utc>,
    returned_at: Option<DateTime<Utc>>,
    fee: Option<f64>,
}

impl Rental {
    /// Open a new rental with a fresh identifier and no return yet.
    pub fn open(
        customer: CustomerSnapshot,
        item: ItemSnapshot,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RentalId::new(),
            customer,
            item,
            opened_at,
            returned_at: None,
            fee: None,
        }
    }

    pub fn rental_id(&self) -> RentalId {
        self.id
    }

    pub fn customer(&self) -> &CustomerSnapshot {
        &self.customer
    }

    pub fn item(&self) -> &ItemSnapshot {
        &self.item
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn returned_at(&self) -> Option<DateTime<Utc>> {
        self.returned_at
    }

    pub fn fee(&self) -> Option<f64> {
        self.fee
    }

    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    /// One-shot close transition.
    ///
    /// Fails without touching the record if the rental is already settled;
    /// the original `returned_at`/`fee` are never overwritten.
    pub fn close(&mut self, returned_at: DateTime<Utc>, fee: f64) -> Result<(), AlreadyReturned> {
        if self.returned_at.is_some() {
            return Err(AlreadyReturned);
        }
        self.returned_at = Some(returned_at);
        self.fee = Some(fee);
        Ok(())
    }
}

impl Entity for Rental {
    type Id = RentalId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fee owed for a rental interval: whole elapsed days times the daily rate.
///
/// Elapsed days truncate toward zero, so a same-day return owes nothing.
/// Clamped at zero days to stay non-negative even under clock skew.
pub fn rental_fee(
    opened_at: DateTime<Utc>,
    returned_at: DateTime<Utc>,
    daily_rate: f64,
) -> f64 {
    let days = (returned_at - opened_at).num_days().max(0);
    days as f64 * daily_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn snapshots() -> (CustomerSnapshot, ItemSnapshot) {
        let customer = Customer::new("Jordan Smith", "555-0100", false).unwrap();
        let item = Item::new("Rust 101", 1.0, 5).unwrap();
        ((&customer).into(), (&item).into())
    }

    #[test]
    fn open_rental_has_no_return_or_fee() {
        let (c, i) = snapshots();
        let rental = Rental::open(c, i, Utc::now());
        assert!(rental.is_open());
        assert_eq!(rental.returned_at(), None);
        assert_eq!(rental.fee(), None);
    }

    #[test]
    fn close_is_one_shot() {
        let (c, i) = snapshots();
        let mut rental = Rental::open(c, i, Utc::now());

        let first_return = Utc::now();
        rental.close(first_return, 7.0).unwrap();

        let err = rental.close(Utc::now() + Duration::days(1), 99.0).unwrap_err();
        assert_eq!(err, AlreadyReturned);
        // Original values survive the rejected second close.
        assert_eq!(rental.returned_at(), Some(first_return));
        assert_eq!(rental.fee(), Some(7.0));
    }

    #[test]
    fn fee_for_seven_days_at_rate_one_is_seven() {
        let opened = Utc::now() - Duration::days(7);
        assert_eq!(rental_fee(opened, Utc::now(), 1.0), 7.0);
    }

    #[test]
    fn same_instant_return_owes_nothing() {
        let now = Utc::now();
        assert_eq!(rental_fee(now, now, 3.5), 0.0);
    }

    #[test]
    fn partial_day_truncates_to_zero() {
        let opened = Utc::now() - Duration::hours(23);
        assert_eq!(rental_fee(opened, Utc::now(), 2.0), 0.0);
    }

    proptest! {
        #[test]
        fn fee_is_days_times_rate_and_never_negative(
            days in 0i64..=3650,
            hours in 0i64..24,
            rate in 0.0f64..=300.0,
        ) {
            let returned = Utc::now();
            let opened = returned - Duration::days(days) - Duration::hours(hours);
            let fee = rental_fee(opened, returned, rate);
            prop_assert!(fee >= 0.0);
            prop_assert_eq!(fee, days as f64 * rate);
        }

        #[test]
        fn fee_is_monotone_in_elapsed_days(days in 0i64..=3650) {
            let returned = Utc::now();
            let shorter = rental_fee(returned - Duration::days(days), returned, 2.0);
            let longer = rental_fee(returned - Duration::days(days + 1), returned, 2.0);
            prop_assert!(longer >= shorter);
        }
    }
}
