//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`                - Link list (HTML, or JSON with `Accept: application/json`)
//! - `POST   /shortUrls`       - Create a short link (form or JSON)
//! - `DELETE /delete/{code}`   - Delete a short link
//! - `GET    /health`          - Health check (also `/api/health`)
//! - `GET    /{code}`          - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    delete_link_handler, health_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::Router;
use axum::routing::{delete, get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and tracing applied.
///
/// Static paths take precedence over `/{code}`, so `health` and `shortUrls`
/// are never treated as short codes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/shortUrls", post(shorten_handler))
        .route("/delete/{code}", delete(delete_link_handler))
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] behind trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
