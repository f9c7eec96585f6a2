//! shelfd-core: database plumbing for the shelfd item service
//!
//! Connection settings come from the environment; every unit of work runs
//! in a transactional scope on a private connection acquired by waiting
//! out database startup. A scope commits on success and rolls back on
//! error, and the connection is closed either way. Nothing is pooled.

pub mod config;
pub mod db;

pub use config::DbConfig;
pub use db::{acquire, with_transaction};
