//! Common infrastructure for OptiCfg optical device drivers.
//!
//! This crate provides shared functionality for the driver crates
//! (voyagerd, wssd, tsond):
//!
//! - [`error`]: The [`DriverError`] taxonomy shared by all drivers
//! - [`sink`]: The [`CommandSink`] delivery trait and a capturing test sink
//! - [`shell`]: Host command execution for drivers that run a local CLI
//! - [`config`]: Connection parameters handed over by the agent
//!
//! # Architecture
//!
//! Drivers follow this pattern:
//!
//! 1. Validate raw configuration values and decode channel addresses
//! 2. Synthesize vendor command strings from the validated inputs
//! 3. Hand commands to a [`CommandSink`] (REST client, local CLI, or the
//!    relay bridge) for delivery
//!
//! Failures at any stage degrade to a reported [`DriverError`]; no driver
//! path may terminate the owning agent process.

pub mod config;
pub mod error;
pub mod shell;
pub mod sink;

// Re-export commonly used items at crate root
pub use config::ConnectionConfig;
pub use error::{DriverError, DriverResult};
pub use sink::{CaptureSink, CommandSink};
