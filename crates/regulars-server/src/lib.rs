pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the axum Router for a household store rooted at `root`.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf, secret: impl Into<Vec<u8>>) -> anyhow::Result<Router> {
    router(AppState::new(root, secret)?)
}

pub fn router(app_state: AppState) -> anyhow::Result<Router> {
    let origin = match &app_state.config.server.cors_origin {
        Some(origin) => AllowOrigin::exact(origin.parse::<HeaderValue>()?),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/api/auth/verify", get(routes::auth::verify))
        // Items
        .route(
            "/api/items",
            get(routes::items::list_items).post(routes::items::add_item),
        )
        .route(
            "/api/items/{id}",
            put(routes::items::update_item).delete(routes::items::delete_item),
        )
        // Grouped list + trip
        .route("/api/list", get(routes::list::get_list))
        .route(
            "/api/session/items/{id}/toggle",
            post(routes::session::toggle_item),
        )
        .route(
            "/api/session/items/{id}/inventory",
            put(routes::session::set_inventory),
        )
        .route("/api/session/finish", post(routes::session::finish))
        // Share text
        .route("/api/share/full", get(routes::share::full_text))
        .route("/api/share/session", get(routes::share::session_text))
        .route("/api/share-id", post(routes::share::ensure_share_id))
        // Extras
        .route(
            "/api/extras",
            get(routes::extras::list_extras)
                .post(routes::extras::add_extra)
                .delete(routes::extras::clear_extras),
        )
        .route("/api/extras/share", get(routes::extras::share_text))
        .route(
            "/api/extras/{id}/toggle",
            post(routes::extras::toggle_extra),
        )
        .route("/api/extras/{id}", delete(routes::extras::remove_extra))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_auth,
        ));

    Ok(Router::new()
        .route("/api/health", get(routes::health::health))
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/categories", get(routes::categories::list_categories))
        .route("/api/shared/{share_id}", get(routes::share::shared_view))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

/// Start the API server on a pre-bound listener.
///
/// The listener is bound by the caller so it can read the actual port first
/// (useful when `port = 0` and the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    secret: Vec<u8>,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root, secret)?;

    tracing::info!("regulars server listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/health");
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open browser: {e}");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
