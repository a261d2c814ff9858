//! Command synthesis for voyager configuration intents.
//!
//! State-free translation from a validated channel address plus
//! parameter to the full list of vendor commands that realize the
//! intent. Some intents need more than one command (line-side admin
//! state touches both the transponder power and the interface link);
//! a synthesis function either returns the complete list or an error.
//! Partial command emission is forbidden.

use opticfg_common::{DriverError, DriverResult};

use crate::channel::{self, ChannelId, Side};
use crate::commands::{
    build_frequency_cmd, build_link_state_cmd, build_power_cmd, build_vlan_member_cmd,
    POWER_DOWN_DBM, POWER_UP_DBM,
};
use crate::params::{convert_frequency, AdminState, VlanOp};

/// Synthesizes the command sequence for an admin-state change.
///
/// Client side: a single link-state command. Line side: the transponder
/// power command followed by the interface link-state command.
pub fn channel_state_commands(id: ChannelId, state: AdminState) -> DriverResult<Vec<String>> {
    let side = channel::decode_side(id).ok_or(DriverError::AddressDecode { channel: id })?;

    match side {
        Side::Client => {
            let interface =
                channel::interface_name(id).ok_or(DriverError::AddressDecode { channel: id })?;
            Ok(vec![build_link_state_cmd(&interface, state)])
        }
        Side::Line => {
            let transponder =
                channel::transponder_name(id).ok_or(DriverError::AddressDecode { channel: id })?;
            let interface =
                channel::interface_name(id).ok_or(DriverError::AddressDecode { channel: id })?;
            let power = match state {
                AdminState::Enable => POWER_UP_DBM,
                AdminState::Disable => POWER_DOWN_DBM,
            };
            Ok(vec![
                build_power_cmd(&transponder, power),
                build_link_state_cmd(&interface, state),
            ])
        }
    }
}

/// Synthesizes the command for a carrier-frequency change.
///
/// `channel_name` carries the channel index as a suffix (e.g.
/// `Channel-1201`); only line-side channels have a tunable frequency.
pub fn frequency_commands(channel_name: &str, raw_freq: &str) -> DriverResult<Vec<String>> {
    let id = channel::trailing_index(channel_name, '-').ok_or_else(|| {
        DriverError::value_validation("channel-name", channel_name)
    })?;

    let transponder =
        channel::transponder_name(id).ok_or(DriverError::AddressDecode { channel: id })?;

    let freq_thz = convert_frequency(raw_freq)
        .ok_or_else(|| DriverError::value_validation("frequency", raw_freq))?;

    Ok(vec![build_frequency_cmd(&transponder, freq_thz)])
}

/// Synthesizes the command pair for a VLAN membership change.
///
/// A channel pair (channel plus its assignment) maps to two interfaces;
/// the VLAN id is bound to both or to neither.
pub fn vlan_commands(
    id: ChannelId,
    assignment_id: ChannelId,
    vlan_id: u32,
    op: VlanOp,
) -> DriverResult<Vec<String>> {
    let interface_1 =
        channel::interface_name(id).ok_or(DriverError::AddressDecode { channel: id })?;
    let interface_2 = channel::interface_name(assignment_id).ok_or(DriverError::AddressDecode {
        channel: assignment_id,
    })?;

    Ok(vec![
        build_vlan_member_cmd(&interface_1, vlan_id, op),
        build_vlan_member_cmd(&interface_2, vlan_id, op),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_enable_single_command() {
        let cmds = channel_state_commands(1101, AdminState::Enable).unwrap();
        assert_eq!(cmds, vec!["del interface swp1 link down"]);
    }

    #[test]
    fn test_client_disable_single_command() {
        let cmds = channel_state_commands(1112, AdminState::Disable).unwrap();
        assert_eq!(cmds, vec!["add interface swp12 link down"]);
    }

    #[test]
    fn test_line_enable_power_then_link() {
        let cmds = channel_state_commands(1201, AdminState::Enable).unwrap();
        assert_eq!(
            cmds,
            vec![
                "add interface L1 power 0.000000",
                "del interface swpL1 link down",
            ]
        );
    }

    #[test]
    fn test_line_disable_power_then_link() {
        let cmds = channel_state_commands(1204, AdminState::Disable).unwrap();
        assert_eq!(
            cmds,
            vec![
                "add interface L4 power -35.000000",
                "add interface swpL4 link down",
            ]
        );
    }

    #[test]
    fn test_channel_state_invalid_addresses() {
        for id in [1100u32, 1113, 1001, 1301, 1200, 1205] {
            for state in [AdminState::Enable, AdminState::Disable] {
                let err = channel_state_commands(id, state).unwrap_err();
                assert!(
                    matches!(err, DriverError::AddressDecode { channel } if channel == id),
                    "id {}",
                    id
                );
            }
        }
    }

    #[test]
    fn test_frequency_line_side() {
        let cmds = frequency_commands("Channel-1201", "193500000").unwrap();
        assert_eq!(cmds, vec!["add interface L1 frequency 193.500000"]);
    }

    #[test]
    fn test_frequency_rejects_client_side() {
        let err = frequency_commands("Channel-1101", "193500000").unwrap_err();
        assert!(matches!(err, DriverError::AddressDecode { channel: 1101 }));
    }

    #[test]
    fn test_frequency_rejects_out_of_band() {
        let err = frequency_commands("Channel-1201", "197450000").unwrap_err();
        assert!(matches!(err, DriverError::ValueValidation { .. }));
    }

    #[test]
    fn test_frequency_rejects_unparsable_channel_name() {
        let err = frequency_commands("Channel1201", "193500000").unwrap_err();
        assert!(matches!(err, DriverError::ValueValidation { .. }));
    }

    #[test]
    fn test_vlan_both_endpoints() {
        let cmds = vlan_commands(1101, 1203, 100, VlanOp::Add).unwrap();
        assert_eq!(
            cmds,
            vec![
                "add interface swp1 bridge vids 100",
                "add interface swpL3 bridge vids 100",
            ]
        );
    }

    #[test]
    fn test_vlan_delete() {
        let cmds = vlan_commands(1102, 1103, 7, VlanOp::Delete).unwrap();
        assert_eq!(
            cmds,
            vec![
                "del interface swp2 bridge vids 7",
                "del interface swp3 bridge vids 7",
            ]
        );
    }

    #[test]
    fn test_vlan_no_partial_emission() {
        // A bad assignment endpoint fails the whole synthesis
        let err = vlan_commands(1101, 1205, 100, VlanOp::Add).unwrap_err();
        assert!(matches!(err, DriverError::AddressDecode { channel: 1205 }));

        let err = vlan_commands(1100, 1101, 100, VlanOp::Add).unwrap_err();
        assert!(matches!(err, DriverError::AddressDecode { channel: 1100 }));
    }
}
