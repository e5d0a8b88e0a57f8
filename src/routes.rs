//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only ships the compiled admin bundle. Real files under the dist
//! directory are served as-is; every other path falls back to `index.html` so
//! deep links like `/students` reach the client router. The REST API lives on
//! another origin, so `/api/*` is a plain 404 here rather than the HTML shell.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Static bundle with SPA fallback plus `/healthz`.
pub fn app(dist_dir: &Path) -> Router {
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api", any(api_not_served))
        .route("/api/{*rest}", any(api_not_served))
        .fallback_service(spa)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn api_not_served() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
