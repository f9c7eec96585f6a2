//! shelfd - item CRUD API over PostgreSQL
//!
//! Entry point for the shelfd server binary, which provides:
//! - A status probe (`GET /status`)
//! - Item listing, creation and deletion under `/items`
//!
//! The database is provisioned independently; on startup and on every
//! request the service waits for it instead of failing.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use shelfd_core::DbConfig;
use shelfd_server::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "shelfd",
    author,
    version,
    about = "Minimal item CRUD API over PostgreSQL"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug).ok();

    let db = DbConfig::from_env();
    tracing::info!(host = %db.host, database = %db.database, "Database target");

    let config = ServerConfig { bind_addr: cli.bind };
    run_server(db, config)
        .await
        .context("server exited with an error")?;

    Ok(())
}
