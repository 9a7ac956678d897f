//! Rental ledger contract and the in-memory reference implementation.
//!
//! The ledger exclusively owns rental records. Its `close` is a conditional
//! transition ("close only if not yet returned") executed under one write
//! guard, so two concurrent returns for the same rental yield exactly one
//! success and one `AlreadyReturned`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use thiserror::Error;

use rentora_core::{CustomerId, ItemId, RentalId};

use crate::rental::{CustomerSnapshot, ItemSnapshot, Rental};

/// Opaque persistence failure (e.g. a poisoned lock, a lost connection).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("rental storage failure: {0}")]
pub struct StorageError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("rental not found")]
    NotFound,

    #[error("return already processed")]
    AlreadyReturned,

    /// Internal persistence failure (e.g. a poisoned lock). Never a
    /// business outcome; callers map this to a 500-class error.
    #[error("rental storage failure: {0}")]
    Storage(String),
}

/// Rental ledger contract.
pub trait RentalLedger: Send + Sync {
    /// Append a new open rental with a fresh identifier and the given open
    /// timestamp.
    fn create(
        &self,
        customer: CustomerSnapshot,
        item: ItemSnapshot,
        opened_at: DateTime<Utc>,
    ) -> Result<Rental, StorageError>;

    fn find(&self, id: &RentalId) -> Option<Rental>;

    /// All rentals, most recently opened first.
    fn list(&self) -> Vec<Rental>;

    /// The rental a return for `(customer_id, item_id)` should settle:
    /// the most recently opened *open* rental for the pair, or — when none
    /// is open — the most recently opened settled one (so a double return
    /// can be reported as already-processed rather than not-found).
    fn lookup(&self, customer_id: &CustomerId, item_id: &ItemId) -> Option<Rental>;

    /// Conditionally set `returned_at`/`fee`, only if the rental is still
    /// open. A second close fails with `AlreadyReturned` and never
    /// overwrites the original values.
    fn close(
        &self,
        id: &RentalId,
        returned_at: DateTime<Utc>,
        fee: f64,
    ) -> Result<Rental, LedgerError>;
}

impl<L> RentalLedger for Arc<L>
where
    L: RentalLedger + ?Sized,
{
    fn create(
        &self,
        customer: CustomerSnapshot,
        item: ItemSnapshot,
        opened_at: DateTime<Utc>,
    ) -> Result<Rental, StorageError> {
        (**self).create(customer, item, opened_at)
    }

    fn find(&self, id: &RentalId) -> Option<Rental> {
        (**self).find(id)
    }

    fn list(&self) -> Vec<Rental> {
        (**self).list()
    }

    fn lookup(&self, customer_id: &CustomerId, item_id: &ItemId) -> Option<Rental> {
        (**self).lookup(customer_id, item_id)
    }

    fn close(
        &self,
        id: &RentalId,
        returned_at: DateTime<Utc>,
        fee: f64,
    ) -> Result<Rental, LedgerError> {
        (**self).close(id, returned_at, fee)
    }
}

/// In-memory rental ledger.
#[derive(Debug, Default)]
pub struct InMemoryRentalLedger {
    inner: RwLock<HashMap<RentalId, Rental>>,
}

impl InMemoryRentalLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RentalLedger for InMemoryRentalLedger {
    fn create(
        &self,
        customer: CustomerSnapshot,
        item: ItemSnapshot,
        opened_at: DateTime<Utc>,
    ) -> Result<Rental, StorageError> {
        let rental = Rental::open(customer, item, opened_at);
        let mut map = self
            .inner
            .write()
            .map_err(|_| StorageError("ledger lock poisoned".into()))?;
        map.insert(rental.rental_id(), rental.clone());
        Ok(rental)
    }

    fn find(&self, id: &RentalId) -> Option<Rental> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn list(&self) -> Vec<Rental> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        let mut rentals: Vec<Rental> = map.values().cloned().collect();
        rentals.sort_by(|a, b| b.opened_at().cmp(&a.opened_at()));
        rentals
    }

    fn lookup(&self, customer_id: &CustomerId, item_id: &ItemId) -> Option<Rental> {
        let map = self.inner.read().ok()?;
        let matching = map
            .values()
            .filter(|r| r.customer().id == *customer_id && r.item().id == *item_id);

        let newest = |a: &&Rental, b: &&Rental| {
            a.opened_at()
                .cmp(&b.opened_at())
                // UUIDv7 ids are time-ordered; break same-instant ties.
                .then(a.rental_id().as_uuid().cmp(b.rental_id().as_uuid()))
        };

        let (open, settled): (Vec<&Rental>, Vec<&Rental>) =
            matching.partition(|r| r.is_open());

        open.into_iter()
            .max_by(|a, b| newest(a, b))
            .or_else(|| settled.into_iter().max_by(|a, b| newest(a, b)))
            .cloned()
    }

    fn close(
        &self,
        id: &RentalId,
        returned_at: DateTime<Utc>,
        fee: f64,
    ) -> Result<Rental, LedgerError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| LedgerError::Storage("ledger lock poisoned".into()))?;
        let rental = map.get_mut(id).ok_or(LedgerError::NotFound)?;
        rental
            .close(returned_at, fee)
            .map_err(|_| LedgerError::AlreadyReturned)?;
        Ok(rental.clone())
    }
}
