//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request to shorten a URL.
///
/// Accepted as `application/x-www-form-urlencoded` or `application/json`.
/// A missing `url` field deserializes to an empty string and fails validation. The
/// length limit applies to the normalized form and is checked by
/// [`crate::utils::url_normalizer::normalize_url`].
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[serde(default)]
    #[validate(length(min = 1))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response for a shortened URL.
///
/// Identical whether the mapping was just created or already existed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_id: String,
}

impl From<UrlRecord> for ShortenResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_id: record.short_id,
        }
    }
}
