//! Error types shared by the storage, service and HTTP layers.
//!
//! - [`StorageError`] - failures of the backing store, produced by repositories
//! - [`AppError`] - the service-level taxonomy, rendered as HTTP responses
//!
//! Storage details are logged but never exposed to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Failures of the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation timed out: {0}")]
    Timeout(String),

    #[error("storage query failed: {0}")]
    Query(String),

    #[error("invalid data in storage: {0}")]
    InvalidData(String),

    #[error("storage write conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        let message = err.to_string();

        match err {
            sqlx::Error::PoolTimedOut => Self::Timeout(message),
            sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(message),
            sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::RowNotFound => Self::InvalidData(message),
            _ => Self::Query(message),
        }
    }
}

/// Service-level error taxonomy.
///
/// The `Display` text of each variant is exactly what the client receives.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed URL syntax or request body.
    #[error("invalid URL")]
    InvalidInput { reason: String },

    /// The URL's hostname does not resolve.
    #[error("Address not found")]
    HostUnresolvable { host: String },

    /// No record for the requested short identifier.
    #[error("Uh oh. We could not find a link at that URL")]
    NotFound { short_id: String },

    /// The store failed.
    #[error("Server error")]
    Storage(#[from] StorageError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn host_unresolvable(host: impl Into<String>) -> Self {
        Self::HostUnresolvable { host: host.into() }
    }

    pub fn not_found(short_id: impl Into<String>) -> Self {
        Self::NotFound {
            short_id: short_id.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::HostUnresolvable { .. } | Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the underlying cause at a level matching its severity.
    fn log(&self) {
        match self {
            Self::InvalidInput { reason } => tracing::debug!(%reason, "Rejected URL"),
            Self::HostUnresolvable { host } => tracing::debug!(%host, "Host did not resolve"),
            Self::NotFound { short_id } => tracing::debug!(%short_id, "Short link not found"),
            Self::Storage(e) => tracing::error!(error = %e, "Storage failure"),
        }
    }

    /// Renders the error as a plain-text response instead of JSON.
    pub fn into_plain_text_response(self) -> Response {
        self.log();
        (self.status_code(), self.to_string()).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::invalid_input(errors.to_string())
    }
}

/// Wrapper that renders an [`AppError`] as plain text.
///
/// Used by browser-facing routes such as the redirect endpoint.
#[derive(Debug)]
pub struct PlainTextError(pub AppError);

impl From<AppError> for PlainTextError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlainTextError {
    fn into_response(self) -> Response {
        self.0.into_plain_text_response()
    }
}
