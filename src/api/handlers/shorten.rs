//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::FormOrJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short identifier for a URL.
///
/// # Endpoint
///
/// `POST /new`
///
/// # Request Body
///
/// Form-encoded `url=https://example.com/page` or JSON:
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com/page", "short_id": "V1StGXR" }
/// ```
///
/// # Errors
///
/// - 400 `{"error": "invalid URL"}` if the URL is malformed
/// - 404 `{"error": "Address not found"}` if the hostname does not resolve
/// - 500 `{"error": "Server error"}` on storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state.url_service.shorten(&payload.url).await?;

    Ok(Json(record.into()))
}
