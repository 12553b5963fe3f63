//! Device models.
//!
//! Responsibilities:
//! - Decode the `DeviceRouter.getDevices` result and scan it by name.
//! - Describe production states and the parameters of device mutations.
//!
//! Invariants:
//! - Device records keep every field Zenoss returns; only `name` is required.
//! - A found device serializes flat, with the listing's `hash` beside the record's fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use zenoss_config::constants::{DEFAULT_COLLECTOR, DEFAULT_PRODUCTION_STATE};

/// Root of the device tree, used as the listing scope.
pub const DEVICES_ROOT_UID: &str = "/zport/dmd/Devices";

/// Device class used for Linux hosts when none is given.
pub const LINUX_DEVICE_CLASS: &str = "/Server/Linux";

/// A device as listed by Zenoss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeviceRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uid: None,
            extra: Map::new(),
        }
    }
}

/// Result of `DeviceRouter.getDevices`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceList {
    pub devices: Vec<DeviceRecord>,
    pub hash: String,
}

impl DeviceList {
    /// First device whose name equals `name` exactly, paired with the listing hash.
    pub fn find(&self, name: &str) -> Option<FoundDevice> {
        self.devices
            .iter()
            .find(|device| device.name == name)
            .map(|device| FoundDevice {
                device: device.clone(),
                hash: self.hash.clone(),
            })
    }
}

/// A matched device plus the hash of the listing it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundDevice {
    #[serde(flatten)]
    pub device: DeviceRecord,
    pub hash: String,
}

/// Zenoss production state.
///
/// Any integer is accepted; the well-known values have names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionState(pub i32);

impl ProductionState {
    pub const PRODUCTION: Self = Self(1000);
    pub const PRE_PRODUCTION: Self = Self(500);
    pub const TEST: Self = Self(400);
    pub const MAINTENANCE: Self = Self(300);
    pub const DECOMMISSIONED: Self = Self(-1);

    /// Name of a well-known state.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Self::PRODUCTION => Some("Production"),
            Self::PRE_PRODUCTION => Some("Pre-Production"),
            Self::TEST => Some("Test"),
            Self::MAINTENANCE => Some("Maintenance"),
            Self::DECOMMISSIONED => Some("Decommissioned"),
            _ => None,
        }
    }
}

impl Default for ProductionState {
    fn default() -> Self {
        Self(DEFAULT_PRODUCTION_STATE)
    }
}

impl fmt::Display for ProductionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Error returned when a production state string is neither a name nor an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid production state '{0}' (expected production, pre-production, test, maintenance, decommissioned or an integer)"
)]
pub struct ParseProductionStateError(pub String);

impl FromStr for ProductionState {
    type Err = ParseProductionStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "production" => Ok(Self::PRODUCTION),
            "pre-production" | "preproduction" => Ok(Self::PRE_PRODUCTION),
            "test" => Ok(Self::TEST),
            "maintenance" => Ok(Self::MAINTENANCE),
            "decommissioned" => Ok(Self::DECOMMISSIONED),
            other => other
                .parse::<i32>()
                .map(Self)
                .map_err(|_| ParseProductionStateError(trimmed.to_string())),
        }
    }
}

/// Default device class for a host kernel, if one is known.
pub fn device_class_for_kernel(kernel: &str) -> Option<&'static str> {
    kernel
        .eq_ignore_ascii_case("linux")
        .then_some(LINUX_DEVICE_CLASS)
}

/// Options for adding a device.
#[derive(Debug, Clone, PartialEq)]
pub struct AddDeviceOptions {
    /// Device class path; derived from the kernel when `None`.
    pub device_class: Option<String>,
    pub collector: String,
    pub production_state: ProductionState,
}

impl Default for AddDeviceOptions {
    fn default() -> Self {
        Self {
            device_class: None,
            collector: DEFAULT_COLLECTOR.to_string(),
            production_state: ProductionState::default(),
        }
    }
}

/// Parameters of `DeviceRouter.getDevices`.
#[derive(Debug, Clone, Serialize)]
pub struct GetDevicesParams {
    pub uid: String,
    pub params: Map<String, Value>,
    pub limit: Option<u32>,
}

impl Default for GetDevicesParams {
    fn default() -> Self {
        Self {
            uid: DEVICES_ROOT_UID.to_string(),
            params: Map::new(),
            limit: None,
        }
    }
}

/// Parameters of `DeviceRouter.addDevice`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDeviceParams {
    pub device_name: String,
    pub device_class: String,
    pub model: bool,
    pub collector: String,
    pub production_state: ProductionState,
}

/// Parameters of `DeviceRouter.setProductionState`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductionStateUpdate {
    pub uids: Vec<String>,
    #[serde(rename = "prodState")]
    pub prod_state: ProductionState,
    pub hashcheck: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing() -> DeviceList {
        serde_json::from_value(json!({
            "devices": [
                {"name": "hostname1"},
                {"name": "hostname2", "uid": "/zport/dmd/Devices/Server/Linux/devices/hostname2"}
            ],
            "hash": "47ebaaf096c749c92597f05bde625f1e"
        }))
        .unwrap()
    }

    #[test]
    fn test_find_returns_record_with_hash() {
        let found = listing().find("hostname1").unwrap();
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            json!({"name": "hostname1", "hash": "47ebaaf096c749c92597f05bde625f1e"})
        );
    }

    #[test]
    fn test_find_absent() {
        assert!(listing().find("hostname3").is_none());
        assert!(listing().find("HOSTNAME1").is_none());
    }

    #[test]
    fn test_extra_fields_preserved() {
        let list: DeviceList = serde_json::from_value(json!({
            "devices": [{"name": "web01", "ipAddressString": "10.0.0.5", "productionState": 1000}],
            "hash": "h"
        }))
        .unwrap();
        let found = list.find("web01").unwrap();
        assert_eq!(found.device.extra["ipAddressString"], "10.0.0.5");
        let value = serde_json::to_value(&found).unwrap();
        assert_eq!(value["productionState"], 1000);
        assert_eq!(value["hash"], "h");
    }

    fn parse(s: &str) -> ProductionState {
        s.parse().unwrap()
    }

    #[test]
    fn test_production_state_parse() {
        assert_eq!(parse("production"), ProductionState::PRODUCTION);
        assert_eq!(parse("Pre-Production"), ProductionState::PRE_PRODUCTION);
        assert_eq!(parse("maintenance"), ProductionState::MAINTENANCE);
        assert_eq!(parse("-1"), ProductionState::DECOMMISSIONED);
        assert_eq!(parse("250"), ProductionState(250));
        assert!("sometimes".parse::<ProductionState>().is_err());
    }

    #[test]
    fn test_production_state_display() {
        assert_eq!(ProductionState::TEST.to_string(), "Test (400)");
        assert_eq!(ProductionState(250).to_string(), "250");
    }

    #[test]
    fn test_device_class_for_kernel() {
        assert_eq!(device_class_for_kernel("Linux"), Some("/Server/Linux"));
        assert_eq!(device_class_for_kernel("linux"), Some("/Server/Linux"));
        assert_eq!(device_class_for_kernel("windows"), None);
    }

    #[test]
    fn test_mutation_params_shape() {
        let add = AddDeviceParams {
            device_name: "web01".to_string(),
            device_class: "/Server/Linux".to_string(),
            model: true,
            collector: "localhost".to_string(),
            production_state: ProductionState::default(),
        };
        assert_eq!(
            serde_json::to_value(&add).unwrap(),
            json!({
                "deviceName": "web01",
                "deviceClass": "/Server/Linux",
                "model": true,
                "collector": "localhost",
                "productionState": 1000
            })
        );

        let update = ProductionStateUpdate {
            uids: vec!["/zport/dmd/Devices/web01".to_string()],
            prod_state: ProductionState::MAINTENANCE,
            hashcheck: "h".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"uids": ["/zport/dmd/Devices/web01"], "prodState": 300, "hashcheck": "h"})
        );

        assert_eq!(
            serde_json::to_value(GetDevicesParams::default()).unwrap(),
            json!({"uid": "/zport/dmd/Devices", "params": {}, "limit": null})
        );
    }
}
