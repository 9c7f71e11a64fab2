//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures storage errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`.
//!
//! Every error renders as `{"error": <message>, "kind": <kind>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::ValidationError;
use crate::services::password::PasswordError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request field missing or malformed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage operation failed.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Password could not be hashed.
    #[error("{0}")]
    Password(#[from] PasswordError),

    /// Request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Repository(RepositoryError::Conflict(_) | RepositoryError::ForeignKey(_)) => {
                StatusCode::CONFLICT
            }
            Self::Repository(_) => StatusCode::BAD_REQUEST,
            Self::Password(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind carried in the body.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Validation(_) => "validation",
            Self::Repository(RepositoryError::Conflict(_)) => "conflict",
            Self::Repository(RepositoryError::ForeignKey(_)) => "foreign_key",
            Self::Repository(_) => "storage",
            Self::Password(_) => "internal",
        }
    }

    /// Message shown to the client.
    fn message(&self) -> String {
        match self {
            // Hashing details are not useful to the caller
            Self::Password(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Repository(
                RepositoryError::Database(_)
                | RepositoryError::DataCorruption(_)
                | RepositoryError::Unrepresentable(_),
            )
            | Self::Password(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
            }
            Self::Repository(_) => tracing::info!(error = %self, "Constraint violation"),
            Self::Validation(_) | Self::BadRequest(_) => {
                tracing::debug!(error = %self, "Rejected request");
            }
        }

        let body = ErrorBody {
            error: self.message(),
            kind: self.kind(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
