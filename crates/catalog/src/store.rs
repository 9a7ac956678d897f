//! Catalog persistence contract and the in-memory reference implementation.
//!
//! Stock mutations are **conditional updates**, not read-modify-write pairs:
//! `decrement_stock` refuses at zero and performs the check and the write
//! under one guard, so two concurrent opens against the last remaining unit
//! cannot both succeed.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use rentora_core::ItemId;

use crate::item::Item;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item not found")]
    NotFound,

    #[error("item out of stock")]
    OutOfStock,

    /// Internal persistence failure (e.g. a poisoned lock). Never a
    /// business outcome; callers map this to a 500-class error.
    #[error("catalog storage failure: {0}")]
    Storage(String),
}

/// Catalog store contract.
///
/// Reads return `Option`/`Vec`; mutations return typed failures so callers
/// can distinguish "absent" from "stock exhausted".
pub trait CatalogStore: Send + Sync {
    fn find(&self, id: &ItemId) -> Option<Item>;

    /// All items, sorted by name.
    fn list(&self) -> Vec<Item>;

    fn insert(&self, item: Item);

    /// Replace an existing item with an already-validated value (keyed by the
    /// item's own identifier). Fails if the item is absent.
    fn update(&self, item: Item) -> Result<Item, CatalogError>;

    /// Remove an item permanently, returning it.
    fn remove(&self, id: &ItemId) -> Result<Item, CatalogError>;

    /// Decrement stock by one, only if stock > 0 ("decrement where stock > 0").
    fn decrement_stock(&self, id: &ItemId) -> Result<(), CatalogError>;

    /// Increment stock by one. No upper bound is enforced on restock.
    fn increment_stock(&self, id: &ItemId) -> Result<(), CatalogError>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn find(&self, id: &ItemId) -> Option<Item> {
        (**self).find(id)
    }

    fn list(&self) -> Vec<Item> {
        (**self).list()
    }

    fn insert(&self, item: Item) {
        (**self).insert(item)
    }

    fn update(&self, item: Item) -> Result<Item, CatalogError> {
        (**self).update(item)
    }

    fn remove(&self, id: &ItemId) -> Result<Item, CatalogError> {
        (**self).remove(id)
    }

    fn decrement_stock(&self, id: &ItemId) -> Result<(), CatalogError> {
        (**self).decrement_stock(id)
    }

    fn increment_stock(&self, id: &ItemId) -> Result<(), CatalogError> {
        (**self).increment_stock(id)
    }
}

fn poisoned() -> CatalogError {
    CatalogError::Storage("catalog lock poisoned".into())
}

/// In-memory catalog store.
///
/// All conditional logic runs while the write guard is held; no lock is ever
/// held across IO.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn find(&self, id: &ItemId) -> Option<Item> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn list(&self) -> Vec<Item> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        let mut items: Vec<Item> = map.values().cloned().collect();
        items.sort_by(|a, b| a.name().cmp(b.name()));
        items
    }

    fn insert(&self, item: Item) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(item.item_id(), item);
        }
    }

    fn update(&self, item: Item) -> Result<Item, CatalogError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let slot = map.get_mut(&item.item_id()).ok_or(CatalogError::NotFound)?;
        *slot = item.clone();
        Ok(item)
    }

    fn remove(&self, id: &ItemId) -> Result<Item, CatalogError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(id).ok_or(CatalogError::NotFound)
    }

    fn decrement_stock(&self, id: &ItemId) -> Result<(), CatalogError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let item = map.get_mut(id).ok_or(CatalogError::NotFound)?;
        if item.stock() == 0 {
            return Err(CatalogError::OutOfStock);
        }
        item.set_stock(item.stock() - 1);
        Ok(())
    }

    fn increment_stock(&self, id: &ItemId) -> Result<(), CatalogError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let item = map.get_mut(id).ok_or(CatalogError::NotFound)?;
        item.set_stock(item.stock() + 1);
        Ok(())
    }
}
