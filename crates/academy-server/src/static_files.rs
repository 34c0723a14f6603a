//! Static asset serving.
//!
//! Assets live under `/assets/` and come from `academy-assets` in both
//! embedded and filesystem modes.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// Router serving `/assets/{*path}`.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().route("/assets/{*path}", get(serve_asset))
}

async fn serve_asset(Path(path): Path<String>) -> Response {
    match academy_assets::get(&path) {
        Some(content) => (
            [
                (header::CONTENT_TYPE, academy_assets::mime_for(&path)),
                (header::CACHE_CONTROL, "public, max-age=300".to_owned()),
            ],
            content.into_owned(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
