//! Unified error handling for the agent's HTTP surface.
//!
//! Pipeline failures (translation and execution errors) are rendered inline
//! by the console page and never reach this type. `AppError` covers the
//! infrastructure paths where a handler genuinely cannot produce a page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application error type for route handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(error = %self, "request failed");
        sentry::capture_error(&self);

        // Never leak internals to the client.
        (status, "Internal server error").into_response()
    }
}

/// Convenience alias for handler results.
pub type Result<T> = std::result::Result<T, AppError>;
