//! Wavelength-selective switch (WSS) driver.
//!
//! Programs channels through a WSS over its REST API:
//!
//! - [`session`]: the address/port/name triple for one circuit pack
//! - [`payload`]: the JSON config payload (wire-compatible shape)
//! - [`rest`]: the one-shot REST dispatcher
//! - [`circuit_pack`]: connection make/delete on top of the dispatcher

pub mod circuit_pack;
pub mod payload;
pub mod rest;
pub mod session;

pub use circuit_pack::CircuitPack;
pub use payload::{WssConfigEntry, WssConfigPayload};
pub use rest::{post_rest, RestResponse};
pub use session::RestSession;
