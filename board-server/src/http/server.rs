//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing and request timeout middleware
//! - Hidden form method override in front of the router
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, StatusCode};
use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::method_override::method_override;
use super::routes;
use crate::config::BoardConfig;
use crate::service::BoardService;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,

    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from(&BoardConfig::default())
    }
}

impl From<&BoardConfig> for ServerConfig {
    fn from(config: &BoardConfig) -> Self {
        Self {
            bind_addr: config.server.bind,
            cors_permissive: config.server.cors_permissive,
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub service: BoardService,
}

impl AppState {
    pub fn new(service: BoardService) -> Self {
        Self { service }
    }
}

/// Router with every route and middleware, before method override.
pub fn build_router(service: BoardService, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(localhost_origins(config.bind_addr.port()))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api::router())
        .merge(routes::pages::router())
        .layer(timeout_layer(config.request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState::new(service)))
}

/// The full application: router wrapped by the form method override.
///
/// `Router::layer` runs after route matching, so the override has to sit
/// outside the router to change which method handler is selected.
pub fn build_app(service: BoardService, config: &ServerConfig) -> Router {
    let overridden = middleware::from_fn(method_override).layer(build_router(service, config));
    Router::new().fallback_service(overridden)
}

/// Requests running past `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

fn localhost_origins(port: u16) -> Vec<HeaderValue> {
    ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| format!("http://{}:{}", host, port).parse().ok())
        .collect()
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(MemoryPostStore::new());
/// run_server(BoardService::new(store), ServerConfig::default()).await?;
/// ```
pub async fn run_server(service: BoardService, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_app(service, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::get;
    use tower::ServiceExt;

    use crate::db::repos::MemoryPostStore;

    fn service() -> BoardService {
        BoardService::new(Arc::new(MemoryPostStore::new()))
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3030);
        assert!(!config.cors_permissive);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn origins_follow_port() {
        let origins = localhost_origins(8080);
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:8080");
    }

    #[tokio::test]
    async fn slow_requests_time_out_with_408() {
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(timeout_layer(Duration::from_millis(20)));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn both_adapters_share_one_service() {
        let app = build_app(service(), &ServerConfig::default());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/board/write")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("title=hello&content=world&writer=alice"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/board/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/board/1")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("_method=DELETE"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = build_app(service(), &ServerConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
