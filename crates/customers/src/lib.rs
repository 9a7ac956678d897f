//! `rentora-customers` — the customer directory.
//!
//! Rentals snapshot customer fields at open time; this crate is where those
//! fields are resolved from. Edits here never affect historical rentals.

pub mod customer;
pub mod directory;

pub use customer::Customer;
pub use directory::{CustomerDirectory, InMemoryCustomerDirectory};
