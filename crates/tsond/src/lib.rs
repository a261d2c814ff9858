//! TSON transponder driver.
//!
//! Two independent paths to the node:
//!
//! - [`relay`]: the relay bridge, forwarding queued commands over a
//!   persistent auto-reconnecting TCP connection to the hardware
//!   controller
//! - [`fpga`]: REST endpoints for the node's FPGA VLAN mappings

pub mod fpga;
pub mod relay;

pub use fpga::FpgaClient;
pub use relay::{CommandEnvelope, RelayBridge, RelayConfig, RelaySender};
