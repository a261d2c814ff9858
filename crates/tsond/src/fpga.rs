//! FPGA VLAN mapping endpoints.
//!
//! The TSON node's FPGA is configured through a small local REST API;
//! ingress and egress VLAN mappings for a channel are separate
//! endpoints taking `{"ch_index": <n>, "vlan_in"|"vlan_out": <vlan>}`.

use serde::Serialize;
use std::time::Duration;
use tracing::info;

use opticfg_common::{DriverError, DriverResult};

/// Default base URL of the FPGA configuration API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Request timeout for one FPGA configuration post.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct VlanInRequest {
    ch_index: u32,
    vlan_in: u32,
}

#[derive(Debug, Serialize)]
struct VlanOutRequest {
    ch_index: u32,
    vlan_out: u32,
}

/// Client for the FPGA configuration API.
#[derive(Debug, Clone)]
pub struct FpgaClient {
    http: reqwest::Client,
    base_url: String,
}

impl FpgaClient {
    /// Creates a client for the API at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> DriverResult<Self> {
        let base_url = base_url.into();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DriverError::transport(&base_url, e.to_string()))?;
        Ok(Self { http, base_url })
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> DriverResult<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| DriverError::transport(&url, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(DriverError::transport(
                &url,
                format!("status {}: {}", status.as_u16(), text),
            ))
        }
    }

    /// Sets the ingress VLAN mapping for a channel.
    pub async fn set_vlan_in(&self, ch_index: u32, vlan: u32) -> DriverResult<()> {
        info!(channel = ch_index, vlan = vlan, "Setting FPGA ingress VLAN");
        self.post(
            "/configuration/fpga/in/vlan",
            &VlanInRequest { ch_index, vlan_in: vlan },
        )
        .await
    }

    /// Sets the egress VLAN mapping for a channel.
    pub async fn set_vlan_out(&self, ch_index: u32, vlan: u32) -> DriverResult<()> {
        info!(channel = ch_index, vlan = vlan, "Setting FPGA egress VLAN");
        self.post(
            "/configuration/fpga/out/vlan",
            &VlanOutRequest { ch_index, vlan_out: vlan },
        )
        .await
    }
}
