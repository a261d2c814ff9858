//! Voyager packet-optical device driver.
//!
//! Translates logical-channel configuration intents (admin state,
//! frequency, VLAN membership) into NCLU commands and delivers them to
//! the device over its REST RPC endpoint or the local `net` CLI.
//!
//! - [`channel`]: logical channel address codec
//! - [`params`]: validation and physical-unit conversion
//! - [`commands`]: NCLU command builders
//! - [`synth`]: intent-to-command-list synthesis
//! - [`nclu`]: REST delivery client
//! - [`voyager_mgr`]: the driver facade tying the pipeline together

pub mod channel;
pub mod commands;
pub mod nclu;
pub mod params;
pub mod synth;
pub mod voyager_mgr;

pub use channel::{ChannelId, Side};
pub use nclu::NcluClient;
pub use params::{AdminState, VlanOp};
pub use voyager_mgr::VoyagerMgr;
