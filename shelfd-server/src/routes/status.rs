//! Service status endpoint.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// GET /status - liveness probe; touches nothing, always OK.
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}

/// Status routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/status", get(status))
}
