//! NCLU command builders for voyager operations.
//!
//! Every builder returns an owned command string in the literal form the
//! device expects; the numeric formatting (six decimals for power and
//! frequency) is a wire-compatibility contract.

use crate::params::{AdminState, VlanOp};

/// Transmit power applied when a transponder is enabled, dBm.
pub const POWER_UP_DBM: f64 = 0.0;

/// Transmit power applied when a transponder is disabled, dBm.
///
/// A fixed low-power value; the hardware does not accept "off".
pub const POWER_DOWN_DBM: f64 = -35.0;

/// Command that commits the staged configuration on the device.
pub const COMMIT_CMD: &str = "commit";

/// Build the link-state command for an interface.
///
/// NCLU models admin state as a "link down" attribute: disabling adds
/// it, enabling removes it. Yes, `add`/`del` are the right way around.
pub fn build_link_state_cmd(interface: &str, state: AdminState) -> String {
    match state {
        AdminState::Enable => format!("del interface {} link down", interface),
        AdminState::Disable => format!("add interface {} link down", interface),
    }
}

/// Build the transmit-power command for a transponder.
pub fn build_power_cmd(transponder: &str, power_dbm: f64) -> String {
    format!("add interface {} power {:.6}", transponder, power_dbm)
}

/// Build the carrier-frequency command for a transponder.
pub fn build_frequency_cmd(transponder: &str, freq_thz: f64) -> String {
    format!("add interface {} frequency {:.6}", transponder, freq_thz)
}

/// Build the bridge VLAN membership command for an interface.
pub fn build_vlan_member_cmd(interface: &str, vlan_id: u32, op: VlanOp) -> String {
    format!("{} interface {} bridge vids {}", op.verb(), interface, vlan_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_link_state_cmd() {
        assert_eq!(
            build_link_state_cmd("swp1", AdminState::Enable),
            "del interface swp1 link down"
        );
        assert_eq!(
            build_link_state_cmd("swp12", AdminState::Disable),
            "add interface swp12 link down"
        );
    }

    #[test]
    fn test_build_power_cmd() {
        assert_eq!(
            build_power_cmd("L1", POWER_UP_DBM),
            "add interface L1 power 0.000000"
        );
        assert_eq!(
            build_power_cmd("L4", POWER_DOWN_DBM),
            "add interface L4 power -35.000000"
        );
    }

    #[test]
    fn test_build_frequency_cmd() {
        assert_eq!(
            build_frequency_cmd("L1", 193.5),
            "add interface L1 frequency 193.500000"
        );
    }

    #[test]
    fn test_build_vlan_member_cmd() {
        assert_eq!(
            build_vlan_member_cmd("swp3", 100, VlanOp::Add),
            "add interface swp3 bridge vids 100"
        );
        assert_eq!(
            build_vlan_member_cmd("swp3", 100, VlanOp::Delete),
            "del interface swp3 bridge vids 100"
        );
    }
}
