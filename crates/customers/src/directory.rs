//! Customer directory contract and the in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rentora_core::CustomerId;

use crate::customer::Customer;

pub trait CustomerDirectory: Send + Sync {
    fn find(&self, id: &CustomerId) -> Option<Customer>;

    /// All customers, sorted by name.
    fn list(&self) -> Vec<Customer>;

    fn insert(&self, customer: Customer);
}

impl<S> CustomerDirectory for Arc<S>
where
    S: CustomerDirectory + ?Sized,
{
    fn find(&self, id: &CustomerId) -> Option<Customer> {
        (**self).find(id)
    }

    fn list(&self) -> Vec<Customer> {
        (**self).list()
    }

    fn insert(&self, customer: Customer) {
        (**self).insert(customer)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn find(&self, id: &CustomerId) -> Option<Customer> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn list(&self) -> Vec<Customer> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        let mut customers: Vec<Customer> = map.values().cloned().collect();
        customers.sort_by(|a, b| a.name().cmp(b.name()));
        customers
    }

    fn insert(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.customer_id(), customer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_finds_customers() {
        let dir = InMemoryCustomerDirectory::new();
        let c = Customer::new("Jordan Smith", "555-0100", false).unwrap();
        let id = c.customer_id();
        dir.insert(c);

        assert_eq!(dir.find(&id).unwrap().name(), "Jordan Smith");
        assert!(dir.find(&CustomerId::new()).is_none());
    }
}
