//! The rental lifecycle engine.
//!
//! Orchestrates "open rental" and "close rental" across the catalog store and
//! the rental ledger. Owns no state of its own; every mutation happens in the
//! stores through their conditional-update contracts.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use rentora_catalog::{CatalogError, CatalogStore};
use rentora_core::{CustomerId, ItemId};
use rentora_customers::CustomerDirectory;

use crate::ledger::{LedgerError, RentalLedger};
use crate::rental::{rental_fee, Rental};

/// Typed business failures of the lifecycle engine.
///
/// These are returned as values, never surfaced as opaque errors, so callers
/// can render precise messages and status codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RentalError {
    #[error("invalid customer")]
    InvalidCustomer,

    #[error("invalid item")]
    InvalidItem,

    #[error("item not in stock")]
    OutOfStock,

    #[error("rental not found")]
    RentalNotFound,

    #[error("return already processed")]
    AlreadyReturned,

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Coordinates rental opens and returns across the two stores.
#[derive(Clone)]
pub struct RentalService {
    catalog: Arc<dyn CatalogStore>,
    customers: Arc<dyn CustomerDirectory>,
    ledger: Arc<dyn RentalLedger>,
}

impl RentalService {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        customers: Arc<dyn CustomerDirectory>,
        ledger: Arc<dyn RentalLedger>,
    ) -> Self {
        Self {
            catalog,
            customers,
            ledger,
        }
    }

    /// Open a rental: reserve one unit of stock and append a ledger record
    /// with customer/item snapshots captured at this instant.
    ///
    /// The stock decrement and the ledger append behave as one logical
    /// transaction: if the append fails, the decrement is compensated before
    /// the error propagates.
    pub fn open(&self, customer_id: CustomerId, item_id: ItemId) -> Result<Rental, RentalError> {
        let customer = self
            .customers
            .find(&customer_id)
            .ok_or(RentalError::InvalidCustomer)?;

        let item = self.catalog.find(&item_id).ok_or(RentalError::InvalidItem)?;

        self.catalog.decrement_stock(&item_id).map_err(|e| match e {
            CatalogError::OutOfStock => RentalError::OutOfStock,
            CatalogError::NotFound => RentalError::InvalidItem,
            CatalogError::Storage(detail) => RentalError::Storage(detail),
        })?;

        match self
            .ledger
            .create((&customer).into(), (&item).into(), Utc::now())
        {
            Ok(rental) => Ok(rental),
            Err(e) => {
                // The unit was reserved but never recorded; put it back.
                if let Err(restock) = self.catalog.increment_stock(&item_id) {
                    tracing::error!(
                        item_id = %item_id,
                        error = %restock,
                        "failed to compensate stock after ledger append failure"
                    );
                }
                Err(RentalError::Storage(e.to_string()))
            }
        }
    }

    /// Close (return) a rental: settle the ledger record exactly once, with
    /// a fee from the elapsed whole days, then restore the unit of stock.
    ///
    /// The restock happens only after the close has committed, so a unit can
    /// never be restored twice for one physical return.
    pub fn close(&self, customer_id: CustomerId, item_id: ItemId) -> Result<Rental, RentalError> {
        let rental = self
            .ledger
            .lookup(&customer_id, &item_id)
            .ok_or(RentalError::RentalNotFound)?;

        if !rental.is_open() {
            return Err(RentalError::AlreadyReturned);
        }

        let returned_at = Utc::now();
        let fee = rental_fee(rental.opened_at(), returned_at, rental.item().daily_rate);

        let closed = self
            .ledger
            .close(&rental.rental_id(), returned_at, fee)
            .map_err(|e| match e {
                // Lost the race against a concurrent return.
                LedgerError::AlreadyReturned => RentalError::AlreadyReturned,
                LedgerError::NotFound => RentalError::RentalNotFound,
                LedgerError::Storage(detail) => RentalError::Storage(detail),
            })?;

        match self.catalog.increment_stock(&item_id) {
            Ok(()) => {}
            Err(CatalogError::NotFound) => {
                // The item was removed from the catalog while rented out; the
                // return itself still stands.
                tracing::warn!(item_id = %item_id, "returned item no longer in catalog; skipping restock");
            }
            Err(e) => {
                // The close committed, so the return stands; the unit could
                // not be restored.
                tracing::error!(item_id = %item_id, error = %e, "failed to restock after return");
            }
        }

        Ok(closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use std::thread;

    use rentora_catalog::{InMemoryCatalogStore, Item};
    use rentora_customers::{Customer, InMemoryCustomerDirectory};

    use crate::ledger::{InMemoryRentalLedger, StorageError};
    use crate::rental::{CustomerSnapshot, ItemSnapshot};

    struct Fixture {
        catalog: Arc<InMemoryCatalogStore>,
        ledger: Arc<InMemoryRentalLedger>,
        service: RentalService,
        customer_id: CustomerId,
        item_id: ItemId,
    }

    fn fixture(stock: u32) -> Fixture {
        let catalog = Arc::new(InMemoryCatalogStore::new());
        let customers = Arc::new(InMemoryCustomerDirectory::new());
        let ledger = Arc::new(InMemoryRentalLedger::new());

        let customer = Customer::new("Jordan Smith", "555-0100", false).unwrap();
        let customer_id = customer.customer_id();
        customers.insert(customer);

        let item = Item::new("Rust 101", 1.0, stock).unwrap();
        let item_id = item.item_id();
        catalog.insert(item);

        let service = RentalService::new(catalog.clone(), customers, ledger.clone());
        Fixture {
            catalog,
            ledger,
            service,
            customer_id,
            item_id,
        }
    }

    #[test]
    fn open_decrements_stock_and_appends_an_open_rental() {
        let f = fixture(5);
        let rental = f.service.open(f.customer_id, f.item_id).unwrap();

        assert!(rental.is_open());
        assert_eq!(rental.customer().id, f.customer_id);
        assert_eq!(rental.item().id, f.item_id);
        assert_eq!(f.catalog.find(&f.item_id).unwrap().stock(), 4);
        assert_eq!(f.ledger.list().len(), 1);
    }

    #[test]
    fn open_with_unknown_customer_fails_without_mutation() {
        let f = fixture(5);
        let err = f.service.open(CustomerId::new(), f.item_id).unwrap_err();
        assert_eq!(err, RentalError::InvalidCustomer);
        assert_eq!(f.catalog.find(&f.item_id).unwrap().stock(), 5);
        assert!(f.ledger.list().is_empty());
    }

    #[test]
    fn open_with_unknown_item_fails_without_mutation() {
        let f = fixture(5);
        let err = f.service.open(f.customer_id, ItemId::new()).unwrap_err();
        assert_eq!(err, RentalError::InvalidItem);
        assert!(f.ledger.list().is_empty());
    }

    #[test]
    fn open_with_zero_stock_fails_without_mutation() {
        let f = fixture(0);
        let err = f.service.open(f.customer_id, f.item_id).unwrap_err();
        assert_eq!(err, RentalError::OutOfStock);
        assert_eq!(f.catalog.find(&f.item_id).unwrap().stock(), 0);
        assert!(f.ledger.list().is_empty());
    }

    #[test]
    fn concurrent_opens_against_the_last_unit_sell_it_once() {
        let f = fixture(1);
        let service = Arc::new(f.service);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                let (c, i) = (f.customer_id, f.item_id);
                thread::spawn(move || service.open(c, i).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(f.catalog.find(&f.item_id).unwrap().stock(), 0);
        assert_eq!(f.ledger.list().len(), 1);
    }

    #[test]
    fn close_settles_the_rental_and_restocks() {
        let f = fixture(5);
        f.service.open(f.customer_id, f.item_id).unwrap();
        assert_eq!(f.catalog.find(&f.item_id).unwrap().stock(), 4);

        let closed = f.service.close(f.customer_id, f.item_id).unwrap();
        assert!(!closed.is_open());
        assert!(closed.fee().is_some());
        let elapsed = Utc::now() - closed.returned_at().unwrap();
        assert!(elapsed < Duration::seconds(10));
        assert_eq!(f.catalog.find(&f.item_id).unwrap().stock(), 5);
    }

    #[test]
    fn close_without_a_rental_is_not_found() {
        let f = fixture(5);
        let err = f.service.close(f.customer_id, f.item_id).unwrap_err();
        assert_eq!(err, RentalError::RentalNotFound);
    }

    #[test]
    fn second_close_reports_already_returned_and_restocks_once() {
        let f = fixture(5);
        f.service.open(f.customer_id, f.item_id).unwrap();

        f.service.close(f.customer_id, f.item_id).unwrap();
        let err = f.service.close(f.customer_id, f.item_id).unwrap_err();

        assert_eq!(err, RentalError::AlreadyReturned);
        assert_eq!(f.catalog.find(&f.item_id).unwrap().stock(), 5);
    }

    #[test]
    fn fee_is_whole_days_times_daily_rate() {
        let f = fixture(5);
        // Backdate the open by seeding the ledger directly.
        let customer = CustomerSnapshot {
            id: f.customer_id,
            name: "Jordan Smith".into(),
            phone: "555-0100".into(),
            is_gold: false,
        };
        let item = ItemSnapshot {
            id: f.item_id,
            name: "Rust 101".into(),
            daily_rate: 1.0,
        };
        f.ledger
            .create(customer, item, Utc::now() - Duration::days(7))
            .unwrap();

        let closed = f.service.close(f.customer_id, f.item_id).unwrap();
        assert_eq!(closed.fee(), Some(7.0));
    }

    #[test]
    fn close_tolerates_an_item_deleted_while_rented() {
        let f = fixture(5);
        f.service.open(f.customer_id, f.item_id).unwrap();
        f.catalog.remove(&f.item_id).unwrap();

        let closed = f.service.close(f.customer_id, f.item_id).unwrap();
        assert!(!closed.is_open());
        assert!(f.catalog.find(&f.item_id).is_none());
    }

    /// Ledger that refuses every append; for exercising compensation.
    struct RefusingLedger;

    impl RentalLedger for RefusingLedger {
        fn create(
            &self,
            _customer: CustomerSnapshot,
            _item: ItemSnapshot,
            _opened_at: DateTime<Utc>,
        ) -> Result<Rental, StorageError> {
            Err(StorageError("append refused".into()))
        }

        fn find(&self, _id: &rentora_core::RentalId) -> Option<Rental> {
            None
        }

        fn list(&self) -> Vec<Rental> {
            vec![]
        }

        fn lookup(&self, _customer_id: &CustomerId, _item_id: &ItemId) -> Option<Rental> {
            None
        }

        fn close(
            &self,
            _id: &rentora_core::RentalId,
            _returned_at: DateTime<Utc>,
            _fee: f64,
        ) -> Result<Rental, LedgerError> {
            Err(LedgerError::NotFound)
        }
    }

    #[test]
    fn failed_ledger_append_compensates_the_stock_decrement() {
        let catalog = Arc::new(InMemoryCatalogStore::new());
        let customers = Arc::new(InMemoryCustomerDirectory::new());

        let customer = Customer::new("Jordan Smith", "555-0100", false).unwrap();
        let customer_id = customer.customer_id();
        customers.insert(customer);

        let item = Item::new("Rust 101", 1.0, 3).unwrap();
        let item_id = item.item_id();
        catalog.insert(item);

        let service = RentalService::new(catalog.clone(), customers, Arc::new(RefusingLedger));

        let err = service.open(customer_id, item_id).unwrap_err();
        assert!(matches!(err, RentalError::Storage(_)));
        // Stock must not be left decremented without a rental record.
        assert_eq!(catalog.find(&item_id).unwrap().stock(), 3);
    }
}
