//! GramHook server - Instagram comment webhook relay.
//!
//! Receives comment notifications from Instagram, verifies their
//! signatures, enriches them through the Graph API, and forwards
//! normalized events to a Zapier catch hook.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gramhook::web::{app, AppState};
use gramhook::{Config, Forwarder, GraphClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("relay_starting");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        port = config.port,
        graph_api_base_url = %config.graph_api_base_url,
        zapier_webhook_host = config.zapier_webhook_url.host_str().unwrap_or(""),
        request_timeout_ms = config.request_timeout_ms,
        "config_loaded"
    );

    // Shared HTTP client with a bounded timeout for all outbound calls
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .context("Failed to create HTTP client")?;

    let graph = GraphClient::new(
        client.clone(),
        config.graph_api_base_url.clone(),
        config.access_token.clone(),
    );
    let forwarder = Forwarder::new(client, config.zapier_webhook_url.clone());

    let port = config.port;
    let state = AppState::new(config, graph, forwarder);

    // Build the router
    let router = app(state).layer(TraceLayer::new_for_http());

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(
        address = %addr,
        endpoints = "GET /webhook, POST /webhook, GET /health",
        "relay_listening"
    );

    // Run server with graceful shutdown
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("relay_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("relay_shutting_down");
}
