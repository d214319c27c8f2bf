use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::auth::AuthAccount;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AddItemBody {
    /// May carry legacy suffix/comma metadata, decoded on the way in.
    pub name: String,
    pub category_id: String,
}

#[derive(Deserialize)]
pub struct UpdateItemBody {
    pub name: String,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// GET /api/items: regular items in creation order.
pub async fn list_items(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Result<Json<serde_json::Value>, AppError> {
    let household = super::load_household(&app, &account).await?;
    Ok(Json(serde_json::json!(household.list_items())))
}

/// POST /api/items
pub async fn add_item(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Json(body): Json<AddItemBody>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let item = super::update_household(&app, &account, move |h, registry| {
        h.add_item(&body.name, &body.category_id, registry).cloned()
    })
    .await?;
    tracing::debug!(account = %account, item = %item.id, "item added");
    Ok((StatusCode::CREATED, Json(serde_json::json!(item))))
}

/// PUT /api/items/:id: rename and optionally move to another category.
pub async fn update_item(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Path(id): Path<String>,
    Json(body): Json<UpdateItemBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let item = super::update_household(&app, &account, move |h, registry| {
        h.rename_item(&id, &body.name, body.category_id.as_deref(), registry)
            .cloned()
    })
    .await?;
    Ok(Json(serde_json::json!(item)))
}

/// DELETE /api/items/:id: also drops the item's session entry.
pub async fn delete_item(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = super::update_household(&app, &account, move |h, _| h.delete_item(&id)).await?;
    app.with_trip(&account, |trip| trip.session.forget(&removed.id))
        .await;
    Ok(Json(serde_json::json!({ "deleted": removed.id })))
}
