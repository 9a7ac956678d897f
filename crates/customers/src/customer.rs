use serde::{Deserialize, Serialize};

use rentora_core::{validate, CustomerId, DomainResult, Entity};

/// A customer who can hold rentals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    phone: String,
    is_gold: bool,
}

impl Customer {
    pub const NAME_MIN: usize = 5;
    pub const NAME_MAX: usize = 50;
    pub const PHONE_MIN: usize = 5;
    pub const PHONE_MAX: usize = 50;

    pub fn new(name: &str, phone: &str, is_gold: bool) -> DomainResult<Self> {
        Self::with_id(CustomerId::new(), name, phone, is_gold)
    }

    pub fn with_id(id: CustomerId, name: &str, phone: &str, is_gold: bool) -> DomainResult<Self> {
        let name = validate::length_in("name", name, Self::NAME_MIN, Self::NAME_MAX)?;
        let phone = validate::length_in("phone", phone, Self::PHONE_MIN, Self::PHONE_MAX)?;
        Ok(Self {
            id,
            name,
            phone,
            is_gold,
        })
    }

    pub fn customer_id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn is_gold(&self) -> bool {
        self.is_gold
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentora_core::DomainError;

    #[test]
    fn creates_a_valid_customer() {
        let c = Customer::new("Jordan Smith", "555-0100", true).unwrap();
        assert_eq!(c.name(), "Jordan Smith");
        assert!(c.is_gold());
    }

    #[test]
    fn rejects_short_phone() {
        let err = Customer::new("Jordan Smith", "123", false).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_short_name() {
        let err = Customer::new("abcd", "555-0100", false).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
