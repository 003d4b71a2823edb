// Intent API response types
//
// Every inventory endpoint wraps its payload in the `{"response": [...]}`
// envelope. Device fields use `#[serde(default)]` liberally because the
// controller omits fields depending on device family and discovery state.

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard intent API response envelope.
///
/// Every inventory endpoint wraps its payload:
/// ```json
/// { "response": [ ... ], "version": "1.0" }
/// ```
/// A 200 body without a `response` key is malformed and rejected.
#[derive(Debug, Deserialize)]
pub struct IntentEnvelope<T> {
    pub response: Vec<T>,
    #[serde(default)]
    pub version: Option<String>,
}

// ── Device ───────────────────────────────────────────────────────────

/// Device record from the network-device resource.
///
/// The inventory returns dozens of fields per device. The commonly needed
/// ones are modeled explicitly; everything else lands in `extra`
/// untouched, so no controller data is lost in transit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDevice {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub management_ip_address: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub platform_id: Option<String>,
    #[serde(default)]
    pub software_version: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub reachability_status: Option<String>,
    #[serde(default)]
    pub up_time: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Catch-all for fields this struct doesn't name.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_land_in_extra() {
        let device: NetworkDevice = serde_json::from_value(json!({
            "id": "84e4b133-2668-4705-8163-5694c84e78fb",
            "hostname": "DC1-A3850.cisco.com",
            "managementIpAddress": "10.255.1.10",
            "location": "building-1",
            "memorySize": "873744896"
        }))
        .unwrap();

        assert_eq!(device.hostname.as_deref(), Some("DC1-A3850.cisco.com"));
        assert_eq!(device.management_ip_address.as_deref(), Some("10.255.1.10"));
        assert_eq!(device.extra["location"], json!("building-1"));
        assert_eq!(device.extra["memorySize"], json!("873744896"));
    }

    #[test]
    fn envelope_version_field_is_optional() {
        let envelope: IntentEnvelope<NetworkDevice> =
            serde_json::from_value(json!({ "response": [] })).unwrap();
        assert!(envelope.response.is_empty());
        assert!(envelope.version.is_none());
    }

    #[test]
    fn envelope_requires_response_key() {
        let result = serde_json::from_value::<IntentEnvelope<NetworkDevice>>(json!({}));
        assert!(result.is_err());
    }
}
