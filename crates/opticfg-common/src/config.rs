//! Connection configuration handed over by the agent's config layer.
//!
//! The agent parses the circuit-pack XML tree itself; drivers only ever
//! see the validated fields below. The connection `type` token decides
//! which transport a driver is allowed to open.

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, DriverResult};

/// Connection type token for REST-backed circuit packs.
pub const CONN_TYPE_REST: &str = "rest";

/// Target device connection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Device name (e.g. "WSS-4", "Voyager-1").
    pub device: String,
    /// Connection type token ("rest" for REST-backed circuit packs).
    #[serde(rename = "type")]
    pub conn_type: String,
    /// Target address (hostname or IP).
    pub address: String,
    /// Target TCP port.
    pub port: u16,
}

impl ConnectionConfig {
    /// Creates a connection config from already-validated fields.
    pub fn new(
        device: impl Into<String>,
        conn_type: impl Into<String>,
        address: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            device: device.into(),
            conn_type: conn_type.into(),
            address: address.into(),
            port,
        }
    }

    /// Returns true if this config describes a REST connection.
    pub fn is_rest(&self) -> bool {
        self.conn_type == CONN_TYPE_REST
    }

    /// Ensures the connection type is `rest`, as required by drivers
    /// that only speak REST.
    pub fn require_rest(&self) -> DriverResult<()> {
        if self.is_rest() {
            Ok(())
        } else {
            Err(DriverError::invalid_config(
                "type",
                format!("expected '{}', got '{}'", CONN_TYPE_REST, self.conn_type),
            ))
        }
    }
}
