//! CRUD API scaffold server.
//!
//! Serves the `test` resource routes with the placeholder service.

use clap::Parser;
use scaffold_rest::{PlaceholderTestService, ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %listener.local_addr()?, "Server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        api_prefix = %config.api_prefix,
        docs_path = %config.docs_path,
        "Starting CRUD API scaffold server"
    );

    let app = create_app_with_config(PlaceholderTestService::new(), config.clone());
    serve(app, &config).await
}
