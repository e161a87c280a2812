//! board-server: bulletin board over a single post store
//!
//! One [`BoardService`] serves two adapters: a JSON API for programmatic
//! clients and server-rendered pages for browsers. Posts persist in
//! PostgreSQL or, for tests and demos, in process memory.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;

pub use config::{BoardConfig, ConfigError};
pub use error::{BoardError, BoardResult};
pub use service::BoardService;
