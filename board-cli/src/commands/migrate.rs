//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use board_server::db;
use board_server::BoardConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs, config: BoardConfig) -> Result<()> {
    let database_url = args
        .database_url
        .or(config.database.url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or the config file")?;

    let pool = db::create_pool_with_options(&database_url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    db::migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Migrations applied");
    Ok(())
}
