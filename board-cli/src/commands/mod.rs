//! Command implementations for the board CLI

pub mod config;
pub mod migrate;
pub mod serve;

pub use config::run_config;
pub use migrate::run_migrate;
pub use serve::run_serve;
