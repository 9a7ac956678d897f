//! `rentora-rentals` — the rental ledger and lifecycle engine.
//!
//! The ledger is the authoritative log of open and closed rentals. The
//! engine coordinates the ledger and the catalog store so that stock is
//! reserved exactly once per open and restored exactly once per return,
//! under any interleaving of concurrent requests.

pub mod ledger;
pub mod rental;
pub mod service;

pub use ledger::{InMemoryRentalLedger, LedgerError, RentalLedger, StorageError};
pub use rental::{rental_fee, CustomerSnapshot, ItemSnapshot, Rental};
pub use service::{RentalError, RentalService};
