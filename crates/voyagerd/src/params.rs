//! Validation and physical-unit conversion of raw configuration values.
//!
//! The agent hands over values exactly as they appear in the
//! configuration tree: frequencies as integer strings in Hz-equivalent
//! units, admin states and VLAN operations as uppercase tokens.
//! Anything outside the accepted domain is refused here, before any
//! command is synthesized.

use std::str::FromStr;

/// Lower bound of the tunable band, THz (exclusive).
pub const FREQ_MIN_THZ: f64 = 191.0;

/// Upper bound of the tunable band, THz (exclusive).
pub const FREQ_MAX_THZ: f64 = 197.0;

/// Converts a raw frequency string to THz.
///
/// The raw value is an integer in MHz (Hz-equivalent units divided by
/// 1,000,000 gives THz). Only the open interval (191.0, 197.0) is
/// accepted; out-of-range or malformed input yields `None`, never a
/// clamped value.
pub fn convert_frequency(raw: &str) -> Option<f64> {
    let mhz: i64 = raw.trim().parse().ok()?;
    let thz = mhz as f64 / 1_000_000.0;
    if thz > FREQ_MIN_THZ && thz < FREQ_MAX_THZ {
        Some(thz)
    } else {
        None
    }
}

/// Administrative state of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminState {
    /// Bring the channel up.
    Enable,
    /// Bring the channel down.
    Disable,
}

impl FromStr for AdminState {
    type Err = ();

    /// Accepts exactly the tokens `ENABLE` and `DISABLE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENABLE" => Ok(AdminState::Enable),
            "DISABLE" => Ok(AdminState::Disable),
            _ => Err(()),
        }
    }
}

impl AdminState {
    /// Returns the configuration token for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminState::Enable => "ENABLE",
            AdminState::Disable => "DISABLE",
        }
    }
}

/// VLAN membership operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VlanOp {
    /// Add the interface to the VLAN.
    Add,
    /// Remove the interface from the VLAN.
    Delete,
}

impl FromStr for VlanOp {
    type Err = ();

    /// Accepts exactly the tokens `ADD` and `DELETE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(VlanOp::Add),
            "DELETE" => Ok(VlanOp::Delete),
            _ => Err(()),
        }
    }
}

impl VlanOp {
    /// The NCLU verb for this operation.
    pub fn verb(&self) -> &'static str {
        match self {
            VlanOp::Add => "add",
            VlanOp::Delete => "del",
        }
    }
}
