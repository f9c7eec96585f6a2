//! Connection acquisition and the transactional scope.
//!
//! Every unit of work runs on a private connection: [`acquire`] opens one,
//! waiting for the database for as long as it takes, and
//! [`with_transaction`] wraps it in a commit-or-rollback scope and closes
//! it afterwards. Nothing here is pooled or shared between requests.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use sqlx::{Connection, PgConnection, Postgres, Transaction};
use tracing::warn;

use crate::config::DbConfig;

/// Delay between connection attempts while the database is unreachable.
const RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Open a connection, retrying until the database accepts one.
///
/// Container startup ordering means the database may not be listening yet
/// when the service comes up; the caller is suspended (cooperatively, never
/// an executor thread) until the connection succeeds. There is no retry
/// ceiling and no failure-class discrimination: every connect error counts
/// as "not ready yet" and is logged.
pub async fn acquire(config: &DbConfig) -> PgConnection {
    let options = config.connect_options();
    connect_with_retry(
        || {
            let options = options.clone();
            async move { PgConnection::connect_with(&options).await }
        },
        RETRY_INTERVAL,
    )
    .await
}

/// Retry `attempt` at a fixed interval until it succeeds.
///
/// Factored out of [`acquire`] so the retry behavior can be exercised
/// without a live database.
async fn connect_with_retry<T, E, F, Fut>(mut attempt: F, interval: Duration) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    loop {
        match attempt().await {
            Ok(value) => return value,
            Err(err) => {
                warn!(
                    error = %err,
                    "database is not ready, retrying in {}s",
                    interval.as_secs()
                );
                tokio::time::sleep(interval).await;
            }
        }
    }
}

/// Run `work` inside a transaction on a private connection.
///
/// The scope protocol, on every call:
/// 1. acquire a fresh connection (this may wait, see [`acquire`]),
/// 2. begin a transaction and hand it to `work`,
/// 3. commit if `work` returned `Ok`, roll back if it returned `Err`
///    (the error value is returned to the caller unchanged),
/// 4. close the connection - on both paths, always.
///
/// The scope classifies nothing: whatever `work` produces passes through.
/// A close failure never overrides the outcome; it is only logged.
pub async fn with_transaction<T, E, F>(config: &DbConfig, work: F) -> Result<T, E>
where
    for<'t> F: FnOnce(&'t mut Transaction<'_, Postgres>) -> BoxFuture<'t, Result<T, E>>
        + Send
        + Sync,
    T: Send,
    E: From<sqlx::Error> + Send,
{
    let mut conn = acquire(config).await;
    let outcome = conn.transaction(work).await;
    if let Err(err) = conn.close().await {
        warn!(error = %err, "failed to close connection after scope");
    }
    outcome
}
