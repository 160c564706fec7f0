// ABOUTME: Mock trade-in REST API served with axum
// Static in-memory data, one allowed CORS origin, images served from disk

pub mod data;
pub mod handlers;
pub mod pricing;

pub use data::CatalogData;
pub use pricing::PRICE_RANGE;

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the router with all routes and layers
pub fn build_app(config: &ServerConfig, data: CatalogData) -> Result<Router> {
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .with_context(|| format!("Invalid CORS origin: {}", config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin([origin])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/phones", get(handlers::list_phones))
        .route("/phone-brands", get(handlers::list_brands))
        .route("/phone-series/:brand", get(handlers::list_series))
        .route("/phone-variants", get(handlers::list_variants))
        .route("/time-slots", get(handlers::list_time_slots))
        .route("/estimate-price", post(handlers::estimate_price))
        .nest_service("/images", ServeDir::new(&config.images_dir))
        .with_state(Arc::new(data))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Bind to the configured address and serve until Ctrl+C
pub async fn run_server(config: &ServerConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    serve_with_listener(listener, config).await
}

/// Serve on a pre-bound listener (tests bind port 0)
pub async fn serve_with_listener(
    listener: tokio::net::TcpListener,
    config: &ServerConfig,
) -> Result<()> {
    let app = build_app(config, CatalogData::mock())?;
    let local_addr = listener.local_addr()?;
    info!("Phone Selling API running at http://{}", local_addr);
    info!("CORS origin: {}", config.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler the server simply runs until killed
        std::future::pending::<()>().await;
    }
}
