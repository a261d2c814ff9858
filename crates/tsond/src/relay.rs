//! The relay bridge: queued commands to a persistent device socket.
//!
//! One background worker per driver instance owns the TCP connection to
//! the hardware controller and is the sole consumer of a bounded command
//! queue. Producers enqueue and return immediately; the worker forwards
//! commands strictly in arrival order, raw bytes, no framing (the
//! controller delimits on its own).
//!
//! Connection handling is deliberately asymmetric: a failed *connect*
//! is retried forever at a fixed interval (a device that is not yet
//! reachable is the expected steady state), while a failed *send* drops
//! that one command and tears the connection down for a fresh dial.
//! Delivery is at-most-once per command.

use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use opticfg_common::{DriverError, DriverResult};

/// Maximum size of one queued command, bytes.
pub const MAX_COMMAND_LEN: usize = 256;

/// Default interval between connect attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Default queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// A bounded-size command payload queued for the relay worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEnvelope(String);

impl CommandEnvelope {
    /// Wraps a command, rejecting payloads over [`MAX_COMMAND_LEN`].
    pub fn new(cmd: impl Into<String>) -> DriverResult<Self> {
        let cmd = cmd.into();
        if cmd.len() > MAX_COMMAND_LEN {
            return Err(DriverError::value_validation("command", cmd));
        }
        Ok(Self(cmd))
    }

    /// The raw bytes written to the socket.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The command text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Relay worker configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Controller address (hostname or IP).
    pub address: String,
    /// Controller TCP port.
    pub port: u16,
    /// Queue capacity; producers get [`DriverError::QueueFull`] beyond it.
    pub queue_capacity: usize,
    /// Fixed backoff between connect attempts.
    pub retry_interval: Duration,
}

impl RelayConfig {
    /// Config for `address:port` with default queue and backoff settings.
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

/// Producer handle for the relay queue.
///
/// Cloneable; `enqueue` never blocks. A full queue is reported as an
/// error so producers are never stalled by a slow or absent device.
#[derive(Debug, Clone)]
pub struct RelaySender {
    tx: mpsc::Sender<CommandEnvelope>,
}

impl RelaySender {
    /// Enqueues one command for forwarding.
    pub fn enqueue(&self, cmd: &str) -> DriverResult<()> {
        let envelope = CommandEnvelope::new(cmd)?;
        self.tx.try_send(envelope).map_err(|e| match e {
            TrySendError::Full(_) => DriverError::QueueFull,
            TrySendError::Closed(_) => DriverError::QueueClosed,
        })
    }
}

/// The relay bridge: owns the worker task and its shutdown signal.
pub struct RelayBridge {
    sender: RelaySender,
    cancel: CancellationToken,
    worker: JoinHandle<()>,
}

impl RelayBridge {
    /// Starts the worker task. It begins in the connecting state and
    /// lives until [`RelayBridge::shutdown`].
    pub fn start(config: RelayConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.queue_capacity);
        let cancel = CancellationToken::new();
        let worker = tokio::spawn(relay_worker(config, rx, cancel.clone()));

        Self {
            sender: RelaySender { tx },
            cancel,
            worker,
        }
    }

    /// Returns a producer handle for the queue.
    pub fn sender(&self) -> RelaySender {
        self.sender.clone()
    }

    /// Stops the worker. Queued commands are discarded, not drained.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.worker.await;
    }
}

/// Dials the controller until it answers or shutdown is requested.
async fn connect_with_retry(config: &RelayConfig, cancel: &CancellationToken) -> Option<TcpStream> {
    loop {
        if cancel.is_cancelled() {
            return None;
        }
        match TcpStream::connect((config.address.as_str(), config.port)).await {
            Ok(stream) => {
                info!(address = %config.address, port = config.port, "Relay connected");
                return Some(stream);
            }
            Err(e) => {
                info!(
                    address = %config.address,
                    port = config.port,
                    error = %e,
                    "Relay trying to connect"
                );
                tokio::select! {
                    _ = cancel.cancelled() => return None,
                    _ = tokio::time::sleep(config.retry_interval) => {}
                }
            }
        }
    }
}

/// The worker loop: connect, forward queued commands, reconnect on
/// send failure, exit on cancellation.
async fn relay_worker(
    config: RelayConfig,
    mut rx: mpsc::Receiver<CommandEnvelope>,
    cancel: CancellationToken,
) {
    'connection: loop {
        let mut stream = match connect_with_retry(&config, &cancel).await {
            Some(stream) => stream,
            None => break,
        };

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break 'connection,
                msg = rx.recv() => {
                    let Some(envelope) = msg else { break 'connection };
                    match stream.write_all(envelope.as_bytes()).await {
                        Ok(()) => {
                            debug!(command = %envelope.as_str(), "Relay sent command");
                        }
                        Err(e) => {
                            // At-most-once: the command is dropped, the
                            // connection is recreated for the next one.
                            warn!(
                                command = %envelope.as_str(),
                                error = %e,
                                "Relay send failed, dropping command"
                            );
                            continue 'connection;
                        }
                    }
                }
            }
        }
    }

    info!("Relay worker stopped");
}
