use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;

use regulars_core::types::InventoryStatus;

use crate::auth::AuthAccount;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct InventoryBody {
    pub status: String,
}

/// POST /api/session/items/:id/toggle
///
/// Ids the household does not (yet) have get a default entry; `GET /api/list`
/// drops it again.
pub async fn toggle_item(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let checked = app
        .with_trip(&account, |trip| trip.session.toggle_checked(&id))
        .await;
    Json(serde_json::json!({ "id": id, "checked": checked }))
}

/// PUT /api/session/items/:id/inventory: body `{"status": "available"}`.
pub async fn set_inventory(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Path(id): Path<String>,
    Json(body): Json<InventoryBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let status: InventoryStatus = body.status.parse()?;
    app.with_trip(&account, |trip| trip.session.set_inventory(&id, status))
        .await;
    Ok(Json(serde_json::json!({ "id": id, "inventory": status })))
}

/// POST /api/session/finish: end the trip: clear every check and inventory
/// mark, and uncheck the extras.
pub async fn finish(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Json<serde_json::Value> {
    app.with_trip(&account, |trip| {
        trip.session.reset_all();
        trip.extras.uncheck_all();
    })
    .await;
    tracing::info!(account = %account, "shopping trip finished");
    Json(serde_json::json!({ "ok": true }))
}
