use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::auth::AuthAccount;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AddExtraBody {
    pub name: String,
}

/// GET /api/extras
pub async fn list_extras(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Json<serde_json::Value> {
    let extras = app.trip(&account).await.extras;
    Json(serde_json::json!({
        "items": extras.items(),
        "checked_count": extras.checked_count(),
    }))
}

/// POST /api/extras
pub async fn add_extra(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Json(body): Json<AddExtraBody>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let id = app
        .with_trip(&account, |trip| trip.extras.add(&body.name))
        .await?;
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// DELETE /api/extras: drop every extra item.
pub async fn clear_extras(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Json<serde_json::Value> {
    app.with_trip(&account, |trip| trip.extras.clear()).await;
    Json(serde_json::json!({ "ok": true }))
}

/// POST /api/extras/:id/toggle
pub async fn toggle_extra(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let checked = app
        .with_trip(&account, |trip| trip.extras.toggle(&id))
        .await?;
    Ok(Json(serde_json::json!({ "id": id, "checked": checked })))
}

/// DELETE /api/extras/:id
pub async fn remove_extra(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    app.with_trip(&account, |trip| trip.extras.remove(&id))
        .await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

/// GET /api/extras/share
pub async fn share_text(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Json<serde_json::Value> {
    let text = app.trip(&account).await.extras.render_share_text();
    Json(serde_json::json!({ "text": text }))
}
