//! HTTP routes, grouped by domain area.

use axum::routing::{delete, get, post, put};
use axum::Router;

pub mod customers;
pub mod items;
pub mod rentals;
pub mod returns;
pub mod system;

/// Routes that require no credential: health plus all read endpoints.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/items", get(items::list_items))
        .route("/items/:id", get(items::get_item))
        .route("/customers", get(customers::list_customers))
        .route("/rentals", get(rentals::list_rentals))
        .route("/rentals/:id", get(rentals::get_rental))
}

/// Routes behind the bearer-token middleware.
pub fn protected_router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/items", post(items::create_item))
        .route("/items/:id", put(items::update_item))
        .route("/items/:id", delete(items::delete_item))
        .route("/customers", post(customers::create_customer))
        .route("/rentals", post(rentals::open_rental))
        .route("/returns", post(returns::process_return))
}
