//! HTTP layer
//!
//! Axum server with:
//! - JSON API under `/api/board`
//! - Server-rendered pages under `/board`
//! - Hidden `_method` override for HTML forms
//! - JSON and HTML error responses
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod method_override;
pub mod routes;
pub mod server;
pub mod views;

pub use error::ApiError;
pub use server::{build_app, run_server, AppState, ServerConfig, ServerError};
