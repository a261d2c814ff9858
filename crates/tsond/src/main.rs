//! tsond - TSON transponder driver daemon
//!
//! Entry point for the tsond daemon.

use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use opticfg_tsond::{RelayBridge, RelayConfig};

/// Default controller address, overridable via `TSON_ADDR`.
const DEFAULT_ADDR: &str = "10.10.10.34";

/// Default controller port, overridable via `TSON_PORT`.
const DEFAULT_PORT: u16 = 16001;

/// Initializes tracing/logging subsystem
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    info!("--- Starting tsond ---");

    let address = std::env::var("TSON_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let port = std::env::var("TSON_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let bridge = RelayBridge::start(RelayConfig::new(address.clone(), port));
    info!(address = %address, port = port, "tsond relay started");

    // The agent enqueues commands through the library API; the daemon
    // binary keeps the worker alive until asked to stop.
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to wait for shutdown signal: {}", e);
        return ExitCode::FAILURE;
    }

    info!("tsond shutting down");
    bridge.shutdown().await;
    ExitCode::SUCCESS
}
