use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;

use regulars_core::household::Household;
use regulars_core::RegularsError;

use crate::auth::{hash_password, verify_password, AuthAccount};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RegisterBody {
    pub account_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub account_id: String,
    pub password: String,
}

fn summary(household: &Household) -> serde_json::Value {
    serde_json::json!({
        "account_id": household.account_id,
        "name": household.name,
        "item_count": household.items.len(),
        "share_id": household.share_id,
        "created_at": household.created_at,
    })
}

/// POST /api/auth/register: create a household and sign in.
pub async fn register(
    State(app): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    if body.password.is_empty() {
        return Err(AppError::bad_request("password must not be empty"));
    }
    let name = body
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| body.account_id.clone());
    let password = body.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(AppError::join)??;

    let _guard = app.store_lock.lock().await;
    let root = app.root.clone();
    let household = tokio::task::spawn_blocking(move || {
        Household::create(&root, body.account_id, name, password_hash)
    })
    .await
    .map_err(AppError::join)??;

    tracing::info!(account = %household.account_id, "household registered");
    let token = app.tokens.issue(&household.account_id);
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "token": token, "household": summary(&household) })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(app): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let household = match super::load_household(&app, &body.account_id).await {
        Ok(h) => h,
        Err(e)
            if matches!(
                e.0.downcast_ref::<RegularsError>(),
                Some(RegularsError::HouseholdNotFound(_) | RegularsError::InvalidAccountId(_))
            ) =>
        {
            return Err(RegularsError::InvalidCredentials.into());
        }
        Err(e) => return Err(e),
    };
    let password = body.password;
    let stored = household.password_hash.clone();
    let ok = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(AppError::join)?;
    if !ok {
        tracing::info!(account = %body.account_id, "login rejected");
        return Err(RegularsError::InvalidCredentials.into());
    }
    let token = app.tokens.issue(&household.account_id);
    Ok(Json(
        serde_json::json!({ "token": token, "household": summary(&household) }),
    ))
}

/// GET /api/auth/verify: who does this token belong to.
pub async fn verify(
    State(app): State<AppState>,
    Extension(AuthAccount(account)): Extension<AuthAccount>,
) -> Result<Json<serde_json::Value>, AppError> {
    let household = super::load_household(&app, &account).await?;
    Ok(Json(summary(&household)))
}
