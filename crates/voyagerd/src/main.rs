//! voyagerd - Voyager device driver daemon
//!
//! Entry point for the voyagerd daemon.

use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use opticfg_common::shell::HostCommandSink;
use opticfg_common::CommandSink;
use opticfg_voyagerd::{NcluClient, VoyagerMgr};

/// Default device address, overridable via `VOYAGER_ADDR`.
const DEFAULT_ADDR: &str = "137.222.204.212";

/// Default device port, overridable via `VOYAGER_PORT`.
const DEFAULT_PORT: u16 = 8080;

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

    info!("--- Starting voyagerd ---");

    let address = std::env::var("VOYAGER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let port = std::env::var("VOYAGER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // VOYAGER_LOCAL_CLI=1 runs commands through the local `net` CLI
    // instead of the device's REST endpoint.
    let use_local_cli = std::env::var("VOYAGER_LOCAL_CLI").map(|v| v == "1").unwrap_or(false);

    let sink: Arc<dyn CommandSink> = if use_local_cli {
        Arc::new(HostCommandSink::new())
    } else {
        match NcluClient::new(&address, port) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                error!("Failed to build NCLU client: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };
    let _mgr = VoyagerMgr::new(sink);

    info!(address = %address, port = port, "voyagerd ready");

    // The agent drives the manager through its library API; the daemon
    // binary just holds the process open until asked to stop.
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to wait for shutdown signal: {}", e);
        return ExitCode::FAILURE;
    }

    info!("voyagerd shutting down");
    ExitCode::SUCCESS
}
