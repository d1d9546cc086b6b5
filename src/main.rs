//! HTTP relay.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────┐
//!                   │                  HTTP RELAY                  │
//!   POST descriptor │  ┌────────┐   ┌────────────┐   ┌──────────┐  │
//!   ────────────────┼─▶│  http  │──▶│ descriptor │──▶│ executor │──┼──▶ Target
//!                   │  │ server │   │  (decode)  │   │ + headers│  │    server
//!   status + body   │  └────────┘   └────────────┘   └────┬─────┘  │
//!   ◀───────────────┼── response.rs ◀─────────────────────┘        │
//!                   │                                              │
//!                   │  config · observability · lifecycle          │
//!                   └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use http_relay::config::loader::load_config;
use http_relay::config::RelayConfig;
use http_relay::lifecycle::{signals::shutdown_signal, Shutdown};
use http_relay::observability::{logging, metrics};
use http_relay::HttpServer;

#[derive(Parser)]
#[command(name = "http-relay")]
#[command(about = "Relay arbitrary HTTP calls described by a POSTed JSON payload", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overriding the configuration file.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_tracing(&config.observability.log_level)?;

    tracing::info!("http-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_bytes = config.limits.max_body_bytes,
        config_file = ?cli.config,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
