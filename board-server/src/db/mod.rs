//! Database layer - connection pool, schema and post stores
//!
//! - Connection pool (max 5 connections by default), no Arc<Mutex<Connection>>
//! - One statement per store call, connections returned before the call ends
//! - Rely on affected-row counts for existence, no check-then-write

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
