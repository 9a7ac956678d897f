use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use rentora_catalog::CatalogError;
use rentora_core::DomainError;
use rentora_rentals::RentalError;

/// Map a lifecycle-engine failure to its HTTP response.
pub fn rental_error_to_response(err: RentalError) -> axum::response::Response {
    match err {
        RentalError::InvalidCustomer => {
            json_error(StatusCode::BAD_REQUEST, "invalid_customer", "invalid customer")
        }
        RentalError::InvalidItem => {
            json_error(StatusCode::BAD_REQUEST, "invalid_item", "invalid item")
        }
        RentalError::OutOfStock => {
            json_error(StatusCode::BAD_REQUEST, "out_of_stock", "item not in stock")
        }
        RentalError::RentalNotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "rental not found")
        }
        RentalError::AlreadyReturned => json_error(
            StatusCode::BAD_REQUEST,
            "already_returned",
            "return already processed",
        ),
        RentalError::Storage(detail) => {
            // Log the full context; never leak internals to the caller.
            tracing::error!(error = %detail, "rental storage failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            )
        }
    }
}

/// Map a catalog-store failure to its HTTP response.
pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "item not found")
        }
        CatalogError::OutOfStock => {
            json_error(StatusCode::BAD_REQUEST, "out_of_stock", "item not in stock")
        }
        CatalogError::Storage(detail) => {
            tracing::error!(error = %detail, "catalog storage failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            )
        }
    }
}

/// Map a validation failure on a request payload to 400.
pub fn validation_error_to_response(err: DomainError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
}

/// 400 for a required body field that was not supplied.
pub fn missing_field(field: &str) -> axum::response::Response {
    json_error(
        StatusCode::BAD_REQUEST,
        "validation_error",
        format!("{field} is required"),
    )
}

/// Unwrap a required body field, or produce the 400 response for it.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, axum::response::Response> {
    value.ok_or_else(|| missing_field(field))
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
