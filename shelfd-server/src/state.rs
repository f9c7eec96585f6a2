//! Shared application state.

use shelfd_core::DbConfig;

/// State shared across handlers. Carries the connection settings only:
/// every request opens and closes its own connection through a scope, so
/// there is no pool handle to hold.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DbConfig,
}

impl AppState {
    pub fn new(db: DbConfig) -> Self {
        Self { db }
    }
}
