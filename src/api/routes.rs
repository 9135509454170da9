//! Route configuration for the shortening API.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `POST /new`         - Shorten a URL
/// - `GET  /health`      - Storage health check
/// - `GET  /{short_id}`  - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{short_id}", get(redirect_handler))
}
