//! Typed views over common results
//!
//! Service methods return the device's `result` untouched. These models are
//! an opt-in way to read the well-known shapes:
//!
//! ```rust,no_run
//! use bravia_api::{models, BraviaClient};
//!
//! let client = BraviaClient::new("192.168.1.25")?;
//! let info: models::SystemInformation = models::first(&client.system().system_information()?)?;
//! println!("{} ({})", info.model, info.serial);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiError, Result};

/// Decode the first entry of a result list
pub fn first<T: DeserializeOwned>(result: &Value) -> Result<T> {
    let entry = result.get(0).ok_or_else(|| {
        ApiError::Transport(format!("Expected a non-empty result list, got {}", result))
    })?;

    serde_json::from_value(entry.clone())
        .map_err(|e| ApiError::Transport(format!("Unexpected result shape: {}", e)))
}

/// Decode the list nested in the first entry of a result, e.g. `[[{..}, {..}]]`
pub fn first_list<T: DeserializeOwned>(result: &Value) -> Result<Vec<T>> {
    first::<Vec<T>>(result)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInformation {
    pub product: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub language: String,
    pub model: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub mac_addr: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub generation: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub cid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    pub netif: String,
    #[serde(default)]
    pub hw_addr: String,
    #[serde(default)]
    pub ip_addr_v4: String,
    #[serde(default)]
    pub ip_addr_v6: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub dns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceInformation {
    pub model_name: String,
    pub server_name: String,
    pub interface_version: String,
    pub product_name: String,
    pub product_category: String,
}

/// `active` or `standby`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerStatus {
    pub status: String,
}

impl PowerStatus {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolMode {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedIndicatorStatus {
    pub mode: String,
    /// Reported as a boolean or as the strings `"true"`/`"false"` depending on firmware
    #[serde(default)]
    pub status: Value,
}

impl LedIndicatorStatus {
    pub fn is_on(&self) -> bool {
        match &self.status {
            Value::Bool(on) => *on,
            Value::String(s) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFunction {
    pub option: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub title: String,
    pub uri: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInformation {
    pub target: String,
    pub volume: i64,
    pub mute: bool,
    #[serde(default)]
    pub max_volume: Option<i64>,
    #[serde(default)]
    pub min_volume: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_power_status() {
        let status: PowerStatus = first(&json!([{"status": "active"}])).unwrap();
        assert!(status.is_active());

        let status: PowerStatus = first(&json!([{"status": "standby"}])).unwrap();
        assert!(!status.is_active());
    }

    #[test]
    fn test_first_on_empty_result() {
        let err = first::<PowerStatus>(&json!([])).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_first_on_wrong_shape() {
        let err = first::<PowerStatus>(&json!([{"state": 1}])).unwrap_err();
        match err {
            ApiError::Transport(msg) => assert!(msg.contains("Unexpected result shape")),
            other => panic!("Expected ApiError::Transport, got {:?}", other),
        }
    }

    #[test]
    fn test_system_information() {
        let result = json!([{
            "product": "TV",
            "region": "US",
            "language": "eng",
            "model": "XBR-65X900H",
            "serial": "1234567",
            "macAddr": "aa:bb:cc:dd:ee:ff",
            "name": "BRAVIA",
            "generation": "5.4.0",
            "area": "USA",
            "cid": "0123"
        }]);

        let info: SystemInformation = first(&result).unwrap();
        assert_eq!(info.model, "XBR-65X900H");
        assert_eq!(info.mac_addr, "aa:bb:cc:dd:ee:ff");
        assert_eq!(info.area.as_deref(), Some("USA"));
    }

    #[test]
    fn test_network_settings_list() {
        let result = json!([[
            {
                "netif": "eth0",
                "hwAddr": "aa:bb:cc:dd:ee:ff",
                "ipAddrV4": "192.168.1.25",
                "ipAddrV6": "",
                "netmask": "255.255.255.0",
                "gateway": "192.168.1.1",
                "dns": ["192.168.1.1"]
            },
            { "netif": "wlan0" }
        ]]);

        let settings: Vec<NetworkSettings> = first_list(&result).unwrap();
        assert_eq!(settings.len(), 2);
        assert_eq!(settings[0].ip_addr_v4, "192.168.1.25");
        assert_eq!(settings[0].dns, vec!["192.168.1.1".to_string()]);
        assert_eq!(settings[1].netif, "wlan0");
        assert!(settings[1].dns.is_empty());
    }

    #[test]
    fn test_led_status_variants() {
        let led: LedIndicatorStatus = first(&json!([{"mode": "Demo", "status": "true"}])).unwrap();
        assert!(led.is_on());

        let led: LedIndicatorStatus = first(&json!([{"mode": "Dark", "status": false}])).unwrap();
        assert!(!led.is_on());
    }

    #[test]
    fn test_volume_information_list() {
        let result = json!([[
            {"target": "speaker", "volume": 18, "mute": false, "maxVolume": 100, "minVolume": 0},
            {"target": "headphone", "volume": 5, "mute": true}
        ]]);

        let volumes: Vec<VolumeInformation> = first_list(&result).unwrap();
        assert_eq!(volumes[0].volume, 18);
        assert_eq!(volumes[0].max_volume, Some(100));
        assert!(volumes[1].mute);
        assert_eq!(volumes[1].min_volume, None);
    }

    #[test]
    fn test_applications_and_functions() {
        let apps: Vec<Application> = first_list(&json!([[
            {"title": "Netflix", "uri": "com.sony.dtv.com.netflix.ninja", "icon": "http://icon"}
        ]]))
        .unwrap();
        assert_eq!(apps[0].title, "Netflix");

        let functions: Vec<SupportedFunction> =
            first_list(&json!([[{"option": "WOL", "value": "aa:bb:cc:dd:ee:ff"}]])).unwrap();
        assert_eq!(functions[0].option, "WOL");

        let wol: WolMode = first(&json!([{"enabled": true}])).unwrap();
        assert!(wol.enabled);

        let iface: InterfaceInformation = first(&json!([{
            "modelName": "XBR-65X900H",
            "serverName": "",
            "interfaceVersion": "5.0.1",
            "productName": "BRAVIA",
            "productCategory": "tv"
        }]))
        .unwrap();
        assert_eq!(iface.interface_version, "5.0.1");
    }
}
