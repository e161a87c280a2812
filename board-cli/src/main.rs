//! board CLI - bulletin board server
//!
//! Entry point for the `board` binary:
//! - `serve`: run the JSON API and the server-rendered pages
//! - `migrate`: create the post table in PostgreSQL
//! - `config`: inspect the effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use board_server::BoardConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "board",
    author,
    version,
    about = "Bulletin board server with a JSON API and server-rendered pages"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.board/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the database schema (idempotent)
    Migrate(commands::migrate::MigrateArgs),
    /// Inspect configuration (path, show)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let config = BoardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, config).await?,
        Commands::Config(args) => commands::run_config(args, &config, cli.config.as_deref())?,
    }
    Ok(())
}
