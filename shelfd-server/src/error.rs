//! Request error type and its HTTP boundary adapter.
//!
//! Every error escaping a handler becomes a JSON body of the shape
//! `{"detail": <message>}`. Two failure shapes reach clients: 404 for a
//! missing delete target, 500 with the raw error message for everything
//! else.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors produced while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed resource does not exist.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// A statement or connection failed inside a database scope.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(err) => {
                tracing::error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
