//! HTTP server command
//!
//! Picks the post store from configuration and runs both adapters on one
//! listener until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use board_server::db::{self, MemoryPostStore, PgPostStore, PostStore};
use board_server::http::{run_server, ServerConfig};
use board_server::{BoardConfig, BoardService};

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Keep posts in process memory, ignoring any database URL
    #[arg(long, conflicts_with = "database_url")]
    pub in_memory: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl ServeArgs {
    /// Flags win over environment and file values.
    fn apply(&self, config: &mut BoardConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }
        if self.in_memory {
            config.database.url = None;
        }
        if self.cors_permissive {
            config.server.cors_permissive = true;
        }
        if let Some(secs) = self.timeout {
            config.server.request_timeout_secs = secs;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: BoardConfig) -> Result<()> {
    args.apply(&mut config);

    let store = open_store(&config).await?;
    let service = BoardService::new(store);

    tracing::info!(
        bind = %config.server.bind,
        store = service.backend(),
        "Starting board server"
    );

    run_server(service, ServerConfig::from(&config))
        .await
        .context("Server error")?;

    Ok(())
}

async fn open_store(config: &BoardConfig) -> Result<Arc<dyn PostStore>> {
    let Some(url) = config.database.url.as_deref() else {
        tracing::warn!("No database configured - posts are kept in memory and lost on exit");
        return Ok(Arc::new(MemoryPostStore::with_order(config.board.list_order)));
    };

    let pool = db::create_pool_with_options(url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    db::migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(Arc::new(PgPostStore::with_order(pool, config.board.list_order)))
}
