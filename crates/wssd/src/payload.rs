//! WSS configuration payload.
//!
//! The device's REST API takes one JSON object per request:
//!
//! ```json
//! {"config": [{"in_port": "4", "out_port": "A", "freq": 194.1,
//!              "bandwidth": 0.05, "block": "False"}],
//!  "wss_id": "WSS-4"}
//! ```
//!
//! Field order and the Python-style `"True"`/`"False"` strings for
//! `block` are a wire-compatibility contract with the device firmware.

use serde::{Serialize, Serializer};

/// One entry of the `config` list.
#[derive(Debug, Clone, Serialize)]
pub struct WssConfigEntry {
    /// Input port label.
    pub in_port: String,
    /// Output port label.
    pub out_port: String,
    /// Center frequency, THz.
    pub freq: f64,
    /// Slot width, THz.
    pub bandwidth: f64,
    /// Whether the channel is blocked; serialized as "True"/"False".
    #[serde(serialize_with = "python_bool")]
    pub block: bool,
}

/// The full request body.
#[derive(Debug, Clone, Serialize)]
pub struct WssConfigPayload {
    /// Configuration list (the device accepts several entries per post).
    pub config: Vec<WssConfigEntry>,
    /// Target WSS identifier.
    pub wss_id: String,
}

impl WssConfigPayload {
    /// Builds a single-entry payload for `wss_id`.
    pub fn single(wss_id: impl Into<String>, entry: WssConfigEntry) -> Self {
        Self {
            config: vec![entry],
            wss_id: wss_id.into(),
        }
    }
}

fn python_bool<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let payload = WssConfigPayload::single(
            "WSS-4",
            WssConfigEntry {
                in_port: "4".to_string(),
                out_port: "A".to_string(),
                freq: 194.1,
                bandwidth: 0.05,
                block: false,
            },
        );

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"config":[{"in_port":"4","out_port":"A","freq":194.1,"bandwidth":0.05,"block":"False"}],"wss_id":"WSS-4"}"#
        );
    }

    #[test]
    fn test_block_true_serialization() {
        let payload = WssConfigPayload::single(
            "WSS-1",
            WssConfigEntry {
                in_port: "1".to_string(),
                out_port: "B".to_string(),
                freq: 193.5,
                bandwidth: 0.05,
                block: true,
            },
        );

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""block":"True""#));
    }
}
