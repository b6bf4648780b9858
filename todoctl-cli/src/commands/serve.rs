//! HTTP server command
//!
//! Opens the database, ensures the schema, and serves the todo API until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::{create_pool, run_migrations};
use todoctl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TODOCTL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Path to the SQLite database file (created if missing)
    #[arg(long, env = "TODOCTL_DB_PATH", default_value = "todos.db")]
    pub db_path: PathBuf,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(db_path = %args.db_path.display(), "Opening database");

    let pool = create_pool(&args.db_path)
        .await
        .with_context(|| format!("failed to open database at {}", args.db_path.display()))?;

    run_migrations(&pool)
        .await
        .context("failed to initialise database schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting todoctl server on {}", config.bind_addr);

    // Blocks until shutdown; the pool is closed on the way out
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
