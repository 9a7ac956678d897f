use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use rentora_catalog::{CatalogStore, Item};
use rentora_core::ItemId;

use crate::app::dto::{item_to_json, ItemBody};
use crate::app::errors::{
    catalog_error_to_response, json_error, require, validation_error_to_response,
};
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let items: Vec<_> = services.catalog.list().iter().map(item_to_json).collect();
    Json(items).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<ItemId>() else {
        return not_found();
    };
    match services.catalog.find(&id) {
        Some(item) => Json(item_to_json(&item)).into_response(),
        None => not_found(),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<ItemBody>,
) -> Response {
    let item = match build_item(body, None) {
        Ok(item) => item,
        Err(resp) => return resp,
    };
    services.catalog.insert(item.clone());
    Json(item_to_json(&item)).into_response()
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<ItemBody>,
) -> Response {
    let Ok(id) = id.parse::<ItemId>() else {
        return not_found();
    };
    let replacement = match build_item(body, Some(id)) {
        Ok(item) => item,
        Err(resp) => return resp,
    };
    match services.catalog.update(replacement) {
        Ok(item) => Json(item_to_json(&item)).into_response(),
        Err(e) => catalog_error_to_response(e),
    }
}

/// Delete an item from the catalog. Requires the elevated role.
pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if rentora_auth::require_elevated(ctx.principal()).is_err() {
        return json_error(StatusCode::FORBIDDEN, "forbidden", "access denied");
    }
    let Ok(id) = id.parse::<ItemId>() else {
        return not_found();
    };
    match services.catalog.remove(&id) {
        Ok(item) => Json(item_to_json(&item)).into_response(),
        Err(e) => catalog_error_to_response(e),
    }
}

/// Check field presence, then build a validated item (fresh id for create,
/// the path id for update). Any failure is already an HTTP 400 response.
fn build_item(body: ItemBody, id: Option<ItemId>) -> Result<Item, Response> {
    let name = require("name", body.name)?;
    let unit_rate = require("unitRate", body.unit_rate)?;
    let stock = require("stock", body.stock)?;

    let item = match id {
        Some(id) => Item::with_id(id, &name, unit_rate, stock),
        None => Item::new(&name, unit_rate, stock),
    };
    item.map_err(validation_error_to_response)
}

fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "item not found")
}
