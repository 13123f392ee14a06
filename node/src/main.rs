// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use carros_node::config::NodeConfig;
use carros_node::engine::Engine;
use carros_node::server::{build_router, SharedEngine};
use carros_node::telemetry::init_telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    init_telemetry();

    let cfg = match NodeConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Initializing Carros Node with config: {:?}", cfg);

    let engine = match Engine::from_config(&cfg) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to prepare document at {:?}: {}", cfg.db_path, e);
            std::process::exit(1);
        }
    };

    let shared_state: SharedEngine = Arc::new(Mutex::new(engine));
    let app = build_router(shared_state);

    let listener = match TcpListener::bind(cfg.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", cfg.bind_addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Server listening on {}", cfg.bind_addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
