//! NCLU REST delivery for voyager commands.
//!
//! Voyager devices expose their CLI over an HTTPS RPC endpoint
//! (`/nclu/v1/rpc`). Each synthesized command is posted as a JSON body
//! `{"cmd": "<command>"}` with HTTP basic auth. Devices ship with
//! self-signed certificates, so certificate validation is disabled.

use serde::Serialize;
use std::time::Duration;

use opticfg_common::{CommandSink, DriverError, DriverResult};

/// Default NCLU username on voyager devices.
pub const DEFAULT_USERNAME: &str = "cumulus";

/// Default NCLU password on voyager devices.
pub const DEFAULT_PASSWORD: &str = "CumulusLinux!";

/// Request timeout for one command post.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct NcluRequest<'a> {
    cmd: &'a str,
}

/// REST client for the voyager NCLU RPC endpoint.
#[derive(Debug, Clone)]
pub struct NcluClient {
    http: reqwest::Client,
    endpoint: String,
    username: String,
    password: String,
}

impl NcluClient {
    /// Creates a client for the device at `address:port` using the
    /// default voyager credentials.
    pub fn new(address: &str, port: u16) -> DriverResult<Self> {
        Self::with_credentials(address, port, DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }

    /// Creates a client with explicit credentials.
    pub fn with_credentials(
        address: &str,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> DriverResult<Self> {
        let endpoint = format!("https://{}:{}/nclu/v1/rpc", address, port);
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| DriverError::transport(&endpoint, e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            username: username.into(),
            password: password.into(),
        })
    }

    /// The RPC endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl CommandSink for NcluClient {
    async fn send_command(&self, cmd: &str) -> DriverResult<()> {
        tracing::debug!(endpoint = %self.endpoint, command = %cmd, "Posting NCLU command");

        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .json(&NcluRequest { cmd })
            .send()
            .await
            .map_err(|e| DriverError::transport(&self.endpoint, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(command = %cmd, status = %status, "NCLU command accepted");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DriverError::transport(
                &self.endpoint,
                format!("status {}: {}", status.as_u16(), body),
            ))
        }
    }
}
