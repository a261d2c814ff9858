//! VoyagerMgr - voyager driver facade.
//!
//! Owns the delivery sink and drives the full pipeline for each intent:
//! validate tokens, synthesize the command list, send every command in
//! order, then send `commit`. The synthesized commands are returned to
//! the caller (the agent logs them and uses them in its own bookkeeping).

use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument};

use opticfg_common::{CommandSink, DriverError, DriverResult};

use crate::channel::ChannelId;
use crate::commands::COMMIT_CMD;
use crate::params::{AdminState, VlanOp};
use crate::synth;

/// Driver for one voyager device.
pub struct VoyagerMgr {
    sink: Arc<dyn CommandSink>,
}

impl VoyagerMgr {
    /// Creates a driver that delivers commands through `sink`.
    pub fn new(sink: Arc<dyn CommandSink>) -> Self {
        Self { sink }
    }

    /// Sends every command in `cmds`, then `commit`.
    async fn send_all(&self, cmds: &[String]) -> DriverResult<()> {
        for cmd in cmds {
            self.sink.send_command(cmd).await?;
        }
        self.sink.send_command(COMMIT_CMD).await
    }

    /// Sets the admin state of a logical channel.
    ///
    /// `token` must be `ENABLE` or `DISABLE`. Returns the synthesized
    /// commands on success.
    #[instrument(skip(self))]
    pub async fn set_channel_state(
        &self,
        id: ChannelId,
        token: &str,
    ) -> DriverResult<Vec<String>> {
        let state = AdminState::from_str(token)
            .map_err(|_| DriverError::value_validation("admin-state", token))?;

        let cmds = synth::channel_state_commands(id, state)?;
        self.send_all(&cmds).await?;

        info!(channel = id, state = token, "Set channel admin state");
        Ok(cmds)
    }

    /// Sets the carrier frequency of a line-side channel.
    ///
    /// `channel_name` carries the channel index as a suffix (e.g.
    /// `Channel-1201`); `raw_freq` is the Hz-equivalent integer string.
    #[instrument(skip(self))]
    pub async fn set_frequency(
        &self,
        channel_name: &str,
        raw_freq: &str,
    ) -> DriverResult<Vec<String>> {
        let cmds = synth::frequency_commands(channel_name, raw_freq)?;
        self.send_all(&cmds).await?;

        info!(channel = channel_name, frequency = raw_freq, "Set channel frequency");
        Ok(cmds)
    }

    /// Changes the VLAN membership of a channel pair.
    ///
    /// `token` must be `ADD` or `DELETE`.
    #[instrument(skip(self))]
    pub async fn set_vlan(
        &self,
        id: ChannelId,
        assignment_id: ChannelId,
        vlan_id: u32,
        token: &str,
    ) -> DriverResult<Vec<String>> {
        let op = VlanOp::from_str(token)
            .map_err(|_| DriverError::value_validation("vlan-operation", token))?;

        let cmds = synth::vlan_commands(id, assignment_id, vlan_id, op)?;
        self.send_all(&cmds).await?;

        info!(
            channel = id,
            assignment = assignment_id,
            vlan = vlan_id,
            operation = token,
            "Changed VLAN membership"
        );
        Ok(cmds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opticfg_common::CaptureSink;

    fn mgr_with_capture() -> (VoyagerMgr, Arc<CaptureSink>) {
        let sink = Arc::new(CaptureSink::new());
        (VoyagerMgr::new(sink.clone()), sink)
    }

    #[tokio::test]
    async fn test_client_enable_sends_command_and_commit() {
        let (mgr, sink) = mgr_with_capture();

        let cmds = mgr.set_channel_state(1101, "ENABLE").await.unwrap();
        assert_eq!(cmds, vec!["del interface swp1 link down"]);
        assert_eq!(
            sink.captured(),
            vec!["del interface swp1 link down", "commit"]
        );
    }

    #[tokio::test]
    async fn test_line_disable_sends_both_commands_then_commit() {
        let (mgr, sink) = mgr_with_capture();

        mgr.set_channel_state(1204, "DISABLE").await.unwrap();
        assert_eq!(
            sink.captured(),
            vec![
                "add interface L4 power -35.000000",
                "add interface swpL4 link down",
                "commit",
            ]
        );
    }

    #[tokio::test]
    async fn test_bad_admin_token_sends_nothing() {
        let (mgr, sink) = mgr_with_capture();

        let err = mgr.set_channel_state(1101, "MAYBE").await.unwrap_err();
        assert!(matches!(err, DriverError::ValueValidation { .. }));
        assert!(sink.captured().is_empty());
    }

    #[tokio::test]
    async fn test_bad_address_sends_nothing() {
        let (mgr, sink) = mgr_with_capture();

        let err = mgr.set_channel_state(1205, "ENABLE").await.unwrap_err();
        assert!(matches!(err, DriverError::AddressDecode { channel: 1205 }));
        assert!(sink.captured().is_empty());
    }

    #[tokio::test]
    async fn test_set_frequency() {
        let (mgr, sink) = mgr_with_capture();

        let cmds = mgr.set_frequency("Channel-1203", "194100000").await.unwrap();
        assert_eq!(cmds, vec!["add interface L3 frequency 194.100000"]);
        assert_eq!(
            sink.captured(),
            vec!["add interface L3 frequency 194.100000", "commit"]
        );
    }

    #[tokio::test]
    async fn test_set_vlan_sends_pair_then_commit() {
        let (mgr, sink) = mgr_with_capture();

        mgr.set_vlan(1101, 1102, 100, "ADD").await.unwrap();
        assert_eq!(
            sink.captured(),
            vec![
                "add interface swp1 bridge vids 100",
                "add interface swp2 bridge vids 100",
                "commit",
            ]
        );
    }

    #[tokio::test]
    async fn test_bad_vlan_token_sends_nothing() {
        let (mgr, sink) = mgr_with_capture();

        let err = mgr.set_vlan(1101, 1102, 100, "REMOVE").await.unwrap_err();
        assert!(matches!(err, DriverError::ValueValidation { .. }));
        assert!(sink.captured().is_empty());
    }
}
