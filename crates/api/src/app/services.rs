//! Store wiring for the API process.

use std::sync::Arc;

use rentora_catalog::{CatalogStore, InMemoryCatalogStore};
use rentora_customers::{CustomerDirectory, InMemoryCustomerDirectory};
use rentora_rentals::{InMemoryRentalLedger, RentalLedger, RentalService};

/// Shared application services, injected into handlers as an extension.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<dyn CatalogStore>,
    pub customers: Arc<dyn CustomerDirectory>,
    pub ledger: Arc<dyn RentalLedger>,
    pub rentals: RentalService,
}

/// Wire up the in-memory stores and the lifecycle engine.
pub fn build_services() -> AppServices {
    let catalog: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalogStore::new());
    let customers: Arc<dyn CustomerDirectory> = Arc::new(InMemoryCustomerDirectory::new());
    let ledger: Arc<dyn RentalLedger> = Arc::new(InMemoryRentalLedger::new());

    let rentals = RentalService::new(catalog.clone(), customers.clone(), ledger.clone());

    AppServices {
        catalog,
        customers,
        ledger,
        rentals,
    }
}
