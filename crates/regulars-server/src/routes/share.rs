use axum::extract::{Path, State};
use axum::{Extension, Json};

use regulars_core::household::Household;
use regulars_core::session::SessionState;
use regulars_core::{projection, share};

use crate::auth::AuthAccount;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/share/full: the whole list as shareable text.
pub async fn full_text(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Result<Json<serde_json::Value>, AppError> {
    let household = super::load_household(&app, &account).await?;
    super::warn_orphans(&app.registry, &household);
    let today = chrono::Local::now().date_naive();
    let text = share::render_full_list(&app.registry, household.list_items(), today);
    Ok(Json(serde_json::json!({ "text": text })))
}

/// GET /api/share/session: what still needs buying this trip.
pub async fn session_text(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Result<Json<serde_json::Value>, AppError> {
    let household = super::load_household(&app, &account).await?;
    let trip = app.trip(&account).await;
    let text = share::render_session_list(household.list_items(), &trip.session);
    Ok(Json(serde_json::json!({ "text": text })))
}

/// POST /api/share-id: return the household's share id, minting it on first
/// call.
pub async fn ensure_share_id(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Result<Json<serde_json::Value>, AppError> {
    let share_id =
        super::update_household(&app, &account, |h, _| Ok(h.ensure_share_id().to_string()))
            .await?;
    Ok(Json(serde_json::json!({ "share_id": share_id })))
}

/// GET /api/shared/:share_id: read-only grouped list, no session state.
pub async fn shared_view(
    State(app): State<AppState>,
    Path(share_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let household = tokio::task::spawn_blocking(move || Household::find_by_share_id(&root, &share_id))
        .await
        .map_err(AppError::join)??;
    let groups = projection::project(&app.registry, household.list_items(), &SessionState::new());
    Ok(Json(serde_json::json!({
        "name": household.name,
        "categories": groups,
        "item_count": household.items.len(),
    })))
}
