//! `rentora-catalog` — the catalog of rentable items.
//!
//! Owns item records and their stock counts. Stock mutations go through the
//! [`CatalogStore`] contract, whose conditional updates are what keep stock
//! from going negative under concurrent rental opens.

pub mod item;
pub mod store;

pub use item::Item;
pub use store::{CatalogError, CatalogStore, InMemoryCatalogStore};
