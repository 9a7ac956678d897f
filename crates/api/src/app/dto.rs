//! Request payloads and JSON response mapping.
//!
//! Wire field names are camelCase; identifiers travel as strings.

use serde::Deserialize;
use serde_json::{json, Value};

use rentora_catalog::Item;
use rentora_customers::Customer;
use rentora_rentals::Rental;

/// Item create/update payload. Required fields are `Option` so a missing
/// field yields our own 400 instead of the extractor's 422; presence is
/// checked in the handler.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    pub name: Option<String>,
    pub unit_rate: Option<f64>,
    pub stock: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBody {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_gold: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRentalRequest {
    pub customer_id: Option<String>,
    pub item_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub customer_id: Option<String>,
    pub item_id: Option<String>,
}

pub fn item_to_json(item: &Item) -> Value {
    json!({
        "id": item.item_id().to_string(),
        "name": item.name(),
        "unitRate": item.daily_rate(),
        "stock": item.stock(),
    })
}

pub fn customer_to_json(customer: &Customer) -> Value {
    json!({
        "id": customer.customer_id().to_string(),
        "name": customer.name(),
        "phone": customer.phone(),
        "isGold": customer.is_gold(),
    })
}

pub fn rental_to_json(rental: &Rental) -> Value {
    let mut body = json!({
        "id": rental.rental_id().to_string(),
        "customer": {
            "id": rental.customer().id.to_string(),
            "name": rental.customer().name,
            "phone": rental.customer().phone,
            "isGold": rental.customer().is_gold,
        },
        "item": {
            "id": rental.item().id.to_string(),
            "name": rental.item().name,
            "unitRate": rental.item().daily_rate,
        },
        "openedAt": rental.opened_at().to_rfc3339(),
    });

    if let Some(returned_at) = rental.returned_at() {
        body["returnedAt"] = json!(returned_at.to_rfc3339());
    }
    if let Some(fee) = rental.fee() {
        body["fee"] = json!(fee);
    }

    body
}
