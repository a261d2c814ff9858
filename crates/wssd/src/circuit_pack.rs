//! Circuit-pack connection management over the REST dispatcher.
//!
//! `make_connection` programs a channel through the switch;
//! `delete_connection` re-posts the same entry with the block flag set.
//! Channel identifiers are assigned monotonically per pack and are not
//! persisted across restarts.

use tracing::{info, warn};

use opticfg_common::{DriverError, DriverResult};

use crate::payload::{WssConfigEntry, WssConfigPayload};
use crate::rest::post_rest;
use crate::session::RestSession;

/// Endpoint path for WSS channel configuration.
pub const WSS_CONFIGURE_ENDPOINT: &str = "wssconfigure";

/// One REST-backed WSS circuit pack.
#[derive(Debug)]
pub struct CircuitPack {
    session: RestSession,
    next_channel: u16,
}

impl CircuitPack {
    /// Creates a circuit pack driver over an established session.
    pub fn new(session: RestSession) -> Self {
        Self {
            session,
            next_channel: 1,
        }
    }

    /// The session this pack talks through.
    pub fn session(&self) -> &RestSession {
        &self.session
    }

    fn entry(
        &self,
        in_port: &str,
        out_port: &str,
        center_freq_hz: u32,
        slot_width_hz: u32,
        block: bool,
    ) -> WssConfigEntry {
        WssConfigEntry {
            in_port: in_port.to_string(),
            out_port: out_port.to_string(),
            // Hz-equivalent units to THz
            freq: f64::from(center_freq_hz) / 1.0e6,
            bandwidth: f64::from(slot_width_hz) / 1.0e6,
            block,
        }
    }

    async fn post_entry(&self, entry: WssConfigEntry) -> DriverResult<()> {
        let payload = WssConfigPayload::single(self.session.wss_name.clone(), entry);
        let response = post_rest(
            &self.session.address,
            self.session.port,
            WSS_CONFIGURE_ENDPOINT,
            &payload,
        )
        .await?;

        if response.is_ok() {
            Ok(())
        } else {
            warn!(
                wss = %self.session.wss_name,
                status = response.status,
                body = %response.body,
                "WSS rejected configuration"
            );
            Err(DriverError::transport(
                format!(
                    "http://{}:{}/{}",
                    self.session.address, self.session.port, WSS_CONFIGURE_ENDPOINT
                ),
                format!("status {}: {}", response.status, response.body),
            ))
        }
    }

    /// Programs a channel through the switch and returns its assigned
    /// channel identifier.
    pub async fn make_connection(
        &mut self,
        in_port: &str,
        out_port: &str,
        center_freq_hz: u32,
        slot_width_hz: u32,
    ) -> DriverResult<u16> {
        let entry = self.entry(in_port, out_port, center_freq_hz, slot_width_hz, false);
        self.post_entry(entry).await?;

        let id = self.next_channel;
        self.next_channel += 1;

        info!(
            wss = %self.session.wss_name,
            in_port = in_port,
            out_port = out_port,
            channel = id,
            "Connection established"
        );
        Ok(id)
    }

    /// Removes a previously programmed channel by blocking it.
    pub async fn delete_connection(
        &mut self,
        in_port: &str,
        out_port: &str,
        center_freq_hz: u32,
        slot_width_hz: u32,
        id: u16,
    ) -> DriverResult<()> {
        let entry = self.entry(in_port, out_port, center_freq_hz, slot_width_hz, true);
        self.post_entry(entry).await?;

        info!(
            wss = %self.session.wss_name,
            channel = id,
            "Connection removed"
        );
        Ok(())
    }
}
