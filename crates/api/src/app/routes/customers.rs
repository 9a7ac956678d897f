use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use rentora_customers::{Customer, CustomerDirectory};

use crate::app::dto::{customer_to_json, CustomerBody};
use crate::app::errors::{require, validation_error_to_response};
use crate::app::services::AppServices;

pub async fn list_customers(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let customers: Vec<_> = services
        .customers
        .list()
        .iter()
        .map(customer_to_json)
        .collect();
    Json(customers).into_response()
}

pub async fn create_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CustomerBody>,
) -> Response {
    let customer = match build_customer(body) {
        Ok(customer) => customer,
        Err(resp) => return resp,
    };
    services.customers.insert(customer.clone());
    Json(customer_to_json(&customer)).into_response()
}

fn build_customer(body: CustomerBody) -> Result<Customer, Response> {
    let name = require("name", body.name)?;
    let phone = require("phone", body.phone)?;
    Customer::new(&name, &phone, body.is_gold).map_err(validation_error_to_response)
}
