use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::Deserialize;

use regulars_core::projection;
use regulars_core::types::Tag;

use crate::auth::AuthAccount;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    /// Only items with this tag (`?tag=bench` for the bench members).
    pub tag: Option<String>,
}

/// GET /api/list: items grouped by aisle with this trip's state merged in.
pub async fn get_list(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
    Query(q): Query<ListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tag = q.tag.as_deref().map(str::parse::<Tag>).transpose()?;
    let household = super::load_household(&app, &account).await?;
    super::warn_orphans(&app.registry, &household);

    let session = app
        .with_trip(&account, |trip| {
            trip.session
                .retain_known(household.items.iter().map(|i| i.id.as_str()));
            trip.session.clone()
        })
        .await;

    let items = match tag {
        Some(tag) => projection::with_tag(household.list_items(), tag),
        None => household.items.clone(),
    };
    let groups = projection::project(&app.registry, &items, &session);
    Ok(Json(serde_json::json!({
        "categories": groups,
        "needs_purchase_count": session.needs_purchase_count(&items),
        "item_count": household.items.len(),
    })))
}
