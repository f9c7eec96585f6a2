//! shelfd-server: HTTP surface for the shelfd item service
//!
//! Axum routes over the shelfd-core database scope: list, create and
//! delete items, plus a status probe, with request tracing and graceful
//! shutdown.

pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use models::{Item, NewItem};
pub use server::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
