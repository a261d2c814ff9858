//! Error types for driver operations.
//!
//! This module defines the error types used throughout the driver crates.
//! All errors implement `std::error::Error` via `thiserror`.
//!
//! The original agent signalled every failure with the sentinel string
//! `"-1"`. The policy (silently refuse, never crash the agent) is kept,
//! but each failure is now a named variant the caller can match on.

use std::io;
use thiserror::Error;

/// Result type alias for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors that can occur during driver operations.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Logical channel identifier has a side or port outside the valid domain.
    #[error("Logical channel {channel} does not decode to a valid side/port")]
    AddressDecode {
        /// The offending channel identifier.
        channel: u32,
    },

    /// A configuration value failed validation (frequency, admin state, VLAN op).
    #[error("Invalid value for {field}: '{value}'")]
    ValueValidation {
        /// The parameter that failed validation.
        field: String,
        /// The rejected raw value.
        value: String,
    },

    /// Network transport failure (HTTP error, non-success status, socket error).
    #[error("Transport failure talking to {endpoint}: {message}")]
    Transport {
        /// The endpoint or peer involved.
        endpoint: String,
        /// Error message.
        message: String,
    },

    /// Relay queue is full; the command was not enqueued.
    #[error("Relay queue full, command dropped at producer")]
    QueueFull,

    /// Relay queue is closed; the worker has shut down.
    #[error("Relay queue closed, worker no longer running")]
    QueueClosed,

    /// Failed to execute a host command (spawn error).
    #[error("Failed to execute host command '{command}': {source}")]
    ShellExec {
        /// The command that failed to execute.
        command: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Host command returned non-zero exit code.
    #[error("Host command failed: '{command}' (exit code {exit_code}): {output}")]
    ShellCommandFailed {
        /// The command that failed.
        command: String,
        /// The exit code.
        exit_code: i32,
        /// Combined stdout/stderr output.
        output: String,
    },

    /// Connection configuration violation.
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },
}

impl DriverError {
    /// Creates an address decode error.
    pub fn address_decode(channel: u32) -> Self {
        Self::AddressDecode { channel }
    }

    /// Creates a value validation error.
    pub fn value_validation(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ValueValidation {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient condition
    /// that may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DriverError::Transport { .. }
                | DriverError::QueueFull
                | DriverError::ShellCommandFailed { .. }
        )
    }
}
