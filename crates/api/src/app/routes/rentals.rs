use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use rentora_core::{CustomerId, ItemId, RentalId};
use rentora_rentals::RentalLedger;

use crate::app::dto::{rental_to_json, OpenRentalRequest};
use crate::app::errors::{json_error, missing_field, rental_error_to_response};
use crate::app::services::AppServices;

pub async fn list_rentals(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let rentals: Vec<_> = services.ledger.list().iter().map(rental_to_json).collect();
    Json(rentals).into_response()
}

pub async fn get_rental(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<RentalId>() else {
        return json_error(StatusCode::NOT_FOUND, "not_found", "rental not found");
    };
    match services.ledger.find(&id) {
        Some(rental) => Json(rental_to_json(&rental)).into_response(),
        None => json_error(StatusCode::NOT_FOUND, "not_found", "rental not found"),
    }
}

pub async fn open_rental(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<OpenRentalRequest>,
) -> Response {
    let (customer_id, item_id) = match parse_pair(body.customer_id, body.item_id) {
        Ok(pair) => pair,
        Err(resp) => return resp,
    };

    match services.rentals.open(customer_id, item_id) {
        Ok(rental) => Json(rental_to_json(&rental)).into_response(),
        Err(e) => rental_error_to_response(e),
    }
}

/// Parse the customer/item pair shared by rental opens and returns.
///
/// A missing or malformed identifier in the body is the caller's mistake, so
/// both map to 400 (unlike path identifiers, which map to 404).
pub fn parse_pair(
    customer_id: Option<String>,
    item_id: Option<String>,
) -> Result<(CustomerId, ItemId), Response> {
    let customer_id = customer_id.ok_or_else(|| missing_field("customerId"))?;
    let item_id = item_id.ok_or_else(|| missing_field("itemId"))?;

    let customer_id = customer_id
        .parse::<CustomerId>()
        .map_err(|_| malformed("customerId"))?;
    let item_id = item_id.parse::<ItemId>().map_err(|_| malformed("itemId"))?;

    Ok((customer_id, item_id))
}

fn malformed(field: &str) -> Response {
    json_error(
        StatusCode::BAD_REQUEST,
        "validation_error",
        format!("{field} is not a valid id"),
    )
}
