//! The command delivery seam shared by all drivers.
//!
//! Synthesis and delivery are deliberately decoupled: the synthesizer
//! produces opaque command strings, and a [`CommandSink`] gets them onto
//! the device by whatever transport that device speaks (NCLU REST, local
//! CLI, relay socket). Tests substitute a capturing sink.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::DriverResult;

/// Delivers one vendor command string to a device.
///
/// Implementations must be usable from multiple callers concurrently;
/// any per-request state belongs inside `send_command`.
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Sends a single command. An `Err` means the command did not reach
    /// the device; callers decide whether the surrounding operation is
    /// abandoned or retried.
    async fn send_command(&self, cmd: &str) -> DriverResult<()>;
}

/// A sink that records every command instead of delivering it.
///
/// Used by driver tests to assert on exact command sequences.
#[derive(Debug, Default)]
pub struct CaptureSink {
    captured: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the captured commands in send order.
    pub fn captured(&self) -> Vec<String> {
        self.captured.lock().expect("capture lock poisoned").clone()
    }
}

#[async_trait]
impl CommandSink for CaptureSink {
    async fn send_command(&self, cmd: &str) -> DriverResult<()> {
        self.captured
            .lock()
            .expect("capture lock poisoned")
            .push(cmd.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_capture_sink_records_in_order() {
        let sink = CaptureSink::new();
        sink.send_command("add interface swp1 link down")
            .await
            .unwrap();
        sink.send_command("commit").await.unwrap();

        assert_eq!(
            sink.captured(),
            vec!["add interface swp1 link down", "commit"]
        );
    }
}
