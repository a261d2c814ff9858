//! Host command execution for device drivers.
//!
//! Voyager-class devices expose their configuration CLI (`net`) on the
//! host itself, so one delivery path for synthesized commands is simply
//! running them locally. This module provides the async exec helpers and
//! a [`CommandSink`] implementation over them.
//!
//! # Example
//!
//! ```ignore
//! use opticfg_common::shell;
//!
//! let result = shell::exec("/usr/bin/net show interface").await?;
//! if result.success() {
//!     println!("{}", result.stdout);
//! }
//! ```

use std::process::Stdio;
use tokio::process::Command;

use crate::error::{DriverError, DriverResult};
use crate::sink::CommandSink;

/// Path to the `net` command (NCLU CLI) on voyager-class hosts.
pub const NET_CMD: &str = "/usr/bin/net";

/// Result of a host command execution.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// The exit code of the command (0 = success).
    pub exit_code: i32,
    /// The combined stdout output.
    pub stdout: String,
    /// The combined stderr output.
    pub stderr: String,
}

impl ExecResult {
    /// Returns true if the command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns the combined output (stdout + stderr) for error messages.
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Executes a host command asynchronously.
///
/// The command runs through `/bin/sh -c` so the driver can chain
/// sub-commands when a vendor CLI requires it.
pub async fn exec(cmd: &str) -> DriverResult<ExecResult> {
    tracing::debug!(command = %cmd, "Executing host command");

    let output = Command::new("/bin/sh")
        .arg("-c")
        .arg(cmd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| DriverError::ShellExec {
            command: cmd.to_string(),
            source: e,
        })?;

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    let result = ExecResult {
        exit_code,
        stdout,
        stderr,
    };

    if result.success() {
        tracing::trace!(command = %cmd, exit_code = exit_code, "Command succeeded");
    } else {
        tracing::warn!(
            command = %cmd,
            exit_code = exit_code,
            stderr = %result.stderr,
            "Command failed"
        );
    }

    Ok(result)
}

/// Executes a host command and returns an error on non-zero exit.
pub async fn exec_or_throw(cmd: &str) -> DriverResult<String> {
    let result = exec(cmd).await?;
    if result.success() {
        Ok(result.stdout)
    } else {
        Err(DriverError::ShellCommandFailed {
            command: cmd.to_string(),
            exit_code: result.exit_code,
            output: result.combined_output(),
        })
    }
}

/// Delivers synthesized device commands by running them through the
/// local `net` CLI.
///
/// The command text handed to [`CommandSink::send_command`] is the bare
/// vendor command (e.g. `add interface swp1 link down`); this sink
/// prefixes the CLI binary.
#[derive(Debug, Clone, Default)]
pub struct HostCommandSink;

impl HostCommandSink {
    /// Creates a new host command sink.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandSink for HostCommandSink {
    async fn send_command(&self, cmd: &str) -> DriverResult<()> {
        exec_or_throw(&format!("{} {}", NET_CMD, cmd)).await?;
        Ok(())
    }
}
