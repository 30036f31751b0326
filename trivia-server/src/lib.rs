//! trivia-server: HTTP backend for the trivia question bank
//!
//! Exposes category listing, paginated question listing, question
//! create/delete/search, and quiz play over HTTP/JSON, backed by Postgres.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/trivia".to_string()),
        }
    }
}

/// Build the application router with all routes.
///
/// The API is consumed by a browser frontend served from another origin,
/// so CORS allows all origins. Unmatched routes get the same JSON 404
/// envelope as in-route misses.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(http::routes::health::router())
        .merge(http::routes::categories::router())
        .merge(http::routes::questions::router())
        .merge(http::routes::quizzes::router())
        .fallback(http::error::fallback_404)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Errors that can keep the server from starting
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("invalid bind address: {0}")]
    Addr(#[from] std::net::AddrParseError),
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    let pool = db::create_pool(&config.database_url).await?;

    // Schema creation is idempotent; apply on every boot
    db::migrations::run(&pool).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
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
