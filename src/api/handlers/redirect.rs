//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::PlainTextError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// The identifier is used verbatim (case-sensitive, no normalization).
///
/// # Errors
///
/// Returns 404 with a plain-text message if the identifier is unknown.
/// Returns 500 with a plain-text message on storage failure.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, PlainTextError> {
    let record = state.url_service.resolve(&short_id).await?;

    Ok(Redirect::temporary(&record.original_url))
}
