//! REST session bookkeeping for WSS circuit packs.
//!
//! A session is just the address/port/name triple the agent's config
//! layer resolved for the circuit pack. The connection type token must
//! be `rest`; this driver speaks nothing else.

use opticfg_common::{ConnectionConfig, DriverResult};

/// Connection parameters for one WSS circuit pack.
#[derive(Debug, Clone)]
pub struct RestSession {
    /// Device address (hostname or IP).
    pub address: String,
    /// Device REST port.
    pub port: u16,
    /// WSS name, sent as `wss_id` in every config payload.
    pub wss_name: String,
}

impl RestSession {
    /// Creates a session from already-validated fields.
    pub fn new(address: impl Into<String>, port: u16, wss_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port,
            wss_name: wss_name.into(),
        }
    }

    /// Creates a session from the agent's connection config, enforcing
    /// the `rest` connection type.
    pub fn from_config(config: &ConnectionConfig) -> DriverResult<Self> {
        config.require_rest()?;
        Ok(Self::new(
            config.address.clone(),
            config.port,
            config.device.clone(),
        ))
    }
}
