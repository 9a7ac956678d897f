use serde::{Deserialize, Serialize};

use rentora_core::{validate, DomainResult, Entity, ItemId};

/// A catalog entry that can be rented: name, daily rate, finite stock.
///
/// Field bounds: name 5..=50 chars, daily rate 0..=300, stock 0..=500 at
/// creation. Stock is unsigned, so it can never be negative; decrements are
/// additionally guarded at the store boundary (see [`crate::store`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    daily_rate: f64,
    stock: u32,
}

impl Item {
    pub const NAME_MIN: usize = 5;
    pub const NAME_MAX: usize = 50;
    pub const RATE_MAX: f64 = 300.0;
    pub const STOCK_MAX: u32 = 500;

    /// Create a new item with a fresh identifier, validating all fields.
    pub fn new(name: &str, daily_rate: f64, stock: u32) -> DomainResult<Self> {
        Self::with_id(ItemId::new(), name, daily_rate, stock)
    }

    /// Create an item with a caller-supplied identifier (tests, fixtures).
    pub fn with_id(id: ItemId, name: &str, daily_rate: f64, stock: u32) -> DomainResult<Self> {
        let name = validate::length_in("name", name, Self::NAME_MIN, Self::NAME_MAX)?;
        let daily_rate = validate::range_f64("dailyRentalRate", daily_rate, 0.0, Self::RATE_MAX)?;
        let stock = validate::range_u32("numberInStock", stock, 0, Self::STOCK_MAX)?;
        Ok(Self {
            id,
            name,
            daily_rate,
            stock,
        })
    }

    pub fn item_id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn daily_rate(&self) -> f64 {
        self.daily_rate
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub(crate) fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentora_core::DomainError;

    #[test]
    fn creates_a_valid_item() {
        let item = Item::new("Rust 101", 2.5, 10).unwrap();
        assert_eq!(item.name(), "Rust 101");
        assert_eq!(item.daily_rate(), 2.5);
        assert_eq!(item.stock(), 10);
        assert!(item.in_stock());
    }

    #[test]
    fn rejects_short_name() {
        let err = Item::new("abcd", 1.0, 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn name_boundary_is_inclusive() {
        assert!(Item::new("abcde", 1.0, 1).is_ok());
    }

    #[test]
    fn rejects_rate_above_ceiling() {
        let err = Item::new("Rust 101", 300.5, 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_stock_above_ceiling() {
        let err = Item::new("Rust 101", 1.0, 501).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn with_id_keeps_the_given_identifier() {
        let id = ItemId::new();
        let item = Item::with_id(id, "Advanced Rust", 3.0, 0).unwrap();
        assert_eq!(item.item_id(), id);
        assert!(!item.in_stock());
    }
}
