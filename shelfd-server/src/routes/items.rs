//! Item endpoints: list, create, delete.
//!
//! Each handler opens one database scope, issues a single statement, and
//! lets the scope settle commit or rollback before the response is built.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use shelfd_core::with_transaction;

use crate::error::ApiError;
use crate::models::{Item, NewItem};
use crate::state::AppState;

/// GET /items - all items, newest first.
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = with_transaction(&state.db, |tx| {
        Box::pin(async move {
            sqlx::query_as::<_, Item>(
                "SELECT id, name, description, created_at FROM items ORDER BY id DESC",
            )
            .fetch_all(&mut **tx)
            .await
            .map_err(ApiError::from)
        })
    })
    .await?;

    Ok(Json(items))
}

/// POST /items - insert one item, echo the stored row back.
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(new_item): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = with_transaction(&state.db, move |tx| {
        Box::pin(async move {
            sqlx::query_as::<_, Item>(
                "INSERT INTO items (name, description) VALUES ($1, $2) \
                 RETURNING id, name, description, created_at",
            )
            .bind(new_item.name)
            .bind(new_item.description)
            .fetch_one(&mut **tx)
            .await
            .map_err(ApiError::from)
        })
    })
    .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /items/{id} - remove one item; 404 when the id never existed.
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    with_transaction(&state.db, move |tx| {
        Box::pin(async move {
            let deleted = sqlx::query("DELETE FROM items WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;

            // Missing rows are a checked condition, reported distinctly
            // from statement failures.
            match deleted {
                Some(_) => Ok(()),
                None => Err(ApiError::NotFound { resource: "Item" }),
            }
        })
    })
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", delete(delete_item))
}
