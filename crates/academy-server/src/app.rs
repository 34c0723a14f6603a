//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    use handlers::playground;

    // API routes
    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/routes", get(handlers::navigation::get_routes))
        .route("/api/playground/templates", get(playground::list_templates))
        .route("/api/playground/sessions", post(playground::create_session))
        .route(
            "/api/playground/sessions/{id}",
            get(playground::get_session).delete(playground::delete_session),
        )
        .route(
            "/api/playground/sessions/{id}/template",
            put(playground::select_template),
        )
        .route(
            "/api/playground/sessions/{id}/source",
            put(playground::edit_source),
        )
        .route(
            "/api/playground/sessions/{id}/compile",
            post(playground::compile),
        )
        .route("/api/playground/sessions/{id}/reset", post(playground::reset))
        .route(
            "/api/playground/sessions/{id}/download",
            get(playground::download),
        );

    // Assets, then every other GET resolves against the route table
    Router::new()
        .merge(api_routes)
        .merge(static_files::static_router())
        .fallback(get(handlers::pages::get_page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
