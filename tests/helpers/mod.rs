// ABOUTME: Shared test helpers: an in-process mock API server on an ephemeral port

#![allow(dead_code)]

use std::net::SocketAddr;
use tradein::config::{AppConfig, ServerConfig};

/// Start the mock API on 127.0.0.1:0 and return its base URL
pub async fn spawn_server() -> String {
    spawn_server_with(ServerConfig::default()).await
}

pub async fn spawn_server_with(config: ServerConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        tradein::server::serve_with_listener(listener, &config)
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

/// App config whose API client talks to `base_url`
pub fn config_for(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.api.base_url = base_url.to_string();
    config
}
