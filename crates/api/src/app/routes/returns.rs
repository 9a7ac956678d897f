use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use crate::app::dto::{rental_to_json, ReturnRequest};
use crate::app::errors::rental_error_to_response;
use crate::app::routes::rentals::parse_pair;
use crate::app::services::AppServices;

/// Process a return: settles the matching rental and restores stock.
pub async fn process_return(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<ReturnRequest>,
) -> Response {
    let (customer_id, item_id) = match parse_pair(body.customer_id, body.item_id) {
        Ok(pair) => pair,
        Err(resp) => return resp,
    };

    match services.rentals.close(customer_id, item_id) {
        Ok(rental) => Json(rental_to_json(&rental)).into_response(),
        Err(e) => rental_error_to_response(e),
    }
}
