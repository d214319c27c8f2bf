use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use regulars_core::category::CategoryRegistry;
use regulars_core::config::{Config, WarnLevel};
use regulars_core::extra::ExtraList;
use regulars_core::session::SessionState;

use crate::auth::TokenSigner;

/// Per-household trip state. Lives in memory only; a restart starts a fresh
/// trip.
#[derive(Debug, Clone, Default)]
pub struct Trip {
    pub session: SessionState,
    pub extras: ExtraList,
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub config: Arc<Config>,
    pub registry: Arc<CategoryRegistry>,
    pub tokens: Arc<TokenSigner>,
    pub trips: Arc<RwLock<HashMap<String, Trip>>>,
    /// Serializes load-modify-save cycles on household files.
    pub store_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(root: PathBuf, secret: impl Into<Vec<u8>>) -> anyhow::Result<Self> {
        let config = Config::load(&root)?;
        Ok(Self::with_config(root, config, secret))
    }

    pub fn with_config(root: PathBuf, config: Config, secret: impl Into<Vec<u8>>) -> Self {
        for warning in config.validate() {
            match warning.level {
                WarnLevel::Error => tracing::error!("config: {}", warning.message),
                WarnLevel::Warning => tracing::warn!("config: {}", warning.message),
            }
        }
        let registry = config.registry();
        let tokens = TokenSigner::new(secret, config.server.token_ttl_days);
        Self {
            root,
            config: Arc::new(config),
            registry: Arc::new(registry),
            tokens: Arc::new(tokens),
            trips: Arc::new(RwLock::new(HashMap::new())),
            store_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Snapshot of a household's trip, empty if none has started.
    pub async fn trip(&self, account_id: &str) -> Trip {
        self.trips
            .read()
            .await
            .get(account_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Run `f` against the household's trip, creating it on first use.
    pub async fn with_trip<R>(&self, account_id: &str, f: impl FnOnce(&mut Trip) -> R) -> R {
        let mut trips = self.trips.write().await;
        f(trips.entry(account_id.to_string()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_uses_default_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = AppState::new(dir.path().to_path_buf(), b"k".to_vec()).unwrap();
        assert_eq!(state.root, dir.path());
        assert_eq!(state.registry.len(), 12);
        assert_eq!(state.config.server.port, 3001);
    }

    #[tokio::test]
    async fn trips_are_per_household() {
        let state = AppState::with_config(PathBuf::from("/tmp/x"), Config::default(), b"k".to_vec());
        state
            .with_trip("a", |t| t.session.toggle_checked("item-1"))
            .await;
        assert!(state.trip("a").await.session.is_checked("item-1"));
        assert!(!state.trip("b").await.session.is_checked("item-1"));
    }
}
