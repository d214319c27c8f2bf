use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/categories: the registry in aisle order.
pub async fn list_categories(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(app.registry.list()))
}
