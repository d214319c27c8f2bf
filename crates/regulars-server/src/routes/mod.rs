pub mod auth;
pub mod categories;
pub mod extras;
pub mod health;
pub mod items;
pub mod list;
pub mod session;
pub mod share;

use regulars_core::category::CategoryRegistry;
use regulars_core::household::Household;
use regulars_core::RegularsError;

use crate::error::AppError;
use crate::state::AppState;

/// Load a household off the async runtime.
pub(crate) async fn load_household(app: &AppState, account_id: &str) -> Result<Household, AppError> {
    let root = app.root.clone();
    let account_id = account_id.to_string();
    let household = tokio::task::spawn_blocking(move || Household::load(&root, &account_id))
        .await
        .map_err(AppError::join)??;
    Ok(household)
}

/// Load, mutate and save a household while holding the store lock.
pub(crate) async fn update_household<R, F>(
    app: &AppState,
    account_id: &str,
    f: F,
) -> Result<R, AppError>
where
    F: FnOnce(&mut Household, &CategoryRegistry) -> regulars_core::Result<R> + Send + 'static,
    R: Send + 'static,
{
    let _guard = app.store_lock.lock().await;
    let root = app.root.clone();
    let registry = app.registry.clone();
    let account_id = account_id.to_string();
    let out = tokio::task::spawn_blocking(move || {
        let mut household = Household::load(&root, &account_id)?;
        let out = f(&mut household, &registry)?;
        household.save(&root)?;
        Ok::<_, RegularsError>(out)
    })
    .await
    .map_err(AppError::join)??;
    Ok(out)
}

/// Log items whose category is no longer registered. They are hidden from
/// every grouped view.
pub(crate) fn warn_orphans(registry: &CategoryRegistry, household: &Household) {
    for item in regulars_core::projection::orphaned(registry, household.list_items()) {
        tracing::warn!(
            account = %household.account_id,
            item = %item.id,
            category = %item.category_id,
            "item has unknown category; hidden from list"
        );
    }
}
