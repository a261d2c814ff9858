//! The REST dispatcher.
//!
//! One awaited POST per call; the dispatcher never retries. Each call
//! builds its own request and response buffers, so concurrent callers
//! never share mutable state, and the response body is collected without
//! a size limit.

use serde::Serialize;
use std::time::Duration;

use opticfg_common::{DriverError, DriverResult};

/// Request timeout for one dispatch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response of one REST dispatch.
#[derive(Debug, Clone)]
pub struct RestResponse {
    /// Response body text.
    pub body: String,
    /// Numeric HTTP status code.
    pub status: u16,
}

impl RestResponse {
    /// Returns true if the device reported success (HTTP 200).
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Posts `payload` as a JSON body to `http://<address>:<port>/<endpoint>`.
///
/// Network failures are surfaced as [`DriverError::Transport`]; a
/// non-success status code is *not* an error here; the response is
/// returned and the caller applies its own success policy.
pub async fn post_rest<T: Serialize>(
    address: &str,
    port: u16,
    endpoint: &str,
    payload: &T,
) -> DriverResult<RestResponse> {
    let url = format!("http://{}:{}/{}", address, port, endpoint);
    tracing::debug!(url = %url, "Dispatching REST request");

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| DriverError::transport(&url, e.to_string()))?;

    let response = client
        .post(&url)
        .json(payload)
        .send()
        .await
        .map_err(|e| DriverError::transport(&url, e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| DriverError::transport(&url, e.to_string()))?;

    tracing::debug!(url = %url, status = status, "REST response received");

    Ok(RestResponse { body, status })
}
