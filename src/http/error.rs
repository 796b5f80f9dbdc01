//! Error boundary between operations and HTTP responses.
//!
//! # Design Decisions
//! - Every operation returns a named error kind; this is the single place
//!   where kinds become status codes
//! - Every error body is a JSON object with an "error" message string
//! - Server-side failures are logged here, at the boundary, exactly once

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Failure modes a request can surface, one variant per user-visible
/// outcome.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was absent or empty.
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    /// Request body was absent or not valid JSON.
    #[error("No JSON data provided")]
    InvalidBody,

    /// Credential missing or did not match the configured secret.
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// Identifier did not resolve to a contact.
    #[error("Contact not found")]
    NotFound,

    /// Another contact already holds this email.
    #[error("Email already exists")]
    Conflict,

    /// No secret configured server-side; writes are refused.
    #[error("API key not configured on server")]
    ServerMisconfigured,

    /// Underlying persistence failed.
    #[error("Database error: {0}")]
    Store(#[source] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::ServerMisconfigured | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingField { field } => ApiError::Validation { field },
            StoreError::DuplicateEmail => ApiError::Conflict,
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Database(e) => ApiError::Store(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
