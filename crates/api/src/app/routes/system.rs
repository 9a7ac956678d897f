use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::context::PrincipalContext;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Echo the authenticated principal, as resolved by the middleware.
pub async fn whoami(Extension(ctx): Extension<PrincipalContext>) -> impl IntoResponse {
    let principal = ctx.principal();
    let roles: Vec<&str> = principal.roles().iter().map(|r| r.as_str()).collect();

    Json(json!({
        "principalId": principal.principal_id().to_string(),
        "roles": roles,
        "elevated": principal.is_elevated(),
    }))
}
