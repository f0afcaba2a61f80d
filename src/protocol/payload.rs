//! Monitor payload records
//!
//! Flat data-transfer shapes carried in the `Data` field of monitor
//! notifications. Field names on the wire are PascalCase.
//!
//! Decoding is lenient in the same way the peer's encoder is loose: a
//! missing field takes its zero value and a `null` sequence or map decodes as
//! empty. Only `ModularInfo` keeps the null/absent distinction, as `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Liveness
// =============================================================================

/// One device in a `MonitorAliveUpdate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorAliveDevice {
    pub alive: bool,
    pub id: i64,
    pub ip_address: String,
}

pub type MonitorAliveDevices = Vec<MonitorAliveDevice>;

/// One link in a `MonitorAliveUpdate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorAliveLink {
    pub alive: bool,
    pub destination_device_id: i64,
    pub destination_device_ip: String,
    pub destination_interface_id: i64,
    pub id: i64,
    pub redundancy: bool,
    pub source_device_id: i64,
    pub source_device_ip: String,
    pub source_interface_id: i64,
}

pub type MonitorAliveLinks = Vec<MonitorAliveLink>;

// =============================================================================
// System Status
// =============================================================================

/// One device in a `MonitorStatusUpdate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorSystemStatusDevice {
    pub device_id: i64,
    pub device_ip: String,
    pub alias: String,
    pub mac_address: String,
    pub model_name: String,

    /// Emitted as `null` for non-modular hardware
    pub modular_info: Option<DeviceModularInfo>,
    pub firmware_version: String,
    pub product_revision: String,
    pub serial_number: String,
    pub device_name: String,
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub redundant_protocol: Vec<String>,
    #[serde(rename = "CPUUsage")]
    pub cpu_usage: String,
    pub memory_usage: String,
    pub system_uptime: String,
    #[serde(deserialize_with = "null_as_default")]
    pub interfaces: Vec<DeviceInterfaceEntry>,
}

pub type MonitorSystemStatusDevices = Vec<MonitorSystemStatusDevice>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeviceInterfaceEntry {
    pub interface_id: i64,
    pub interface_name: String,
    pub description: String,
    pub mac_address: String,
    pub active: bool,
}

/// Slot-indexed module inventory of a modular chassis
///
/// Slot indices are JSON object keys, so they travel as strings (`"1"`) and
/// are parsed back to integers on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeviceModularInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub ethernet: BTreeMap<i32, EthernetModule>,
    #[serde(deserialize_with = "null_as_default")]
    pub power: BTreeMap<i32, PowerModule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EthernetModule {
    pub exist: bool,
    pub module_name: String,
    pub serial_number: String,
    pub product_revision: String,
    pub status: String,
    pub module_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PowerModule {
    pub exist: bool,
    pub module_name: String,
    pub serial_number: String,
    pub product_revision: String,
    pub status: String,
}

// =============================================================================
// Traffic
// =============================================================================

/// Per-link counters in a `MonitorTrafficUpdate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorTrafficLink {
    pub destination_device_id: i64,
    pub destination_device_ip: String,
    pub destination_interface_id: i64,
    pub source_device_id: i64,
    pub source_device_ip: String,
    pub source_interface_id: i64,
    pub link_id: i64,
    pub speed: i64,
    pub timestamp: i64,
    pub source_traffic_utilization: i64,
    pub destination_traffic_utilization: i64,
}

pub type MonitorTrafficLinks = Vec<MonitorTrafficLink>;

// =============================================================================
// Swift
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorSwiftDevice {
    pub device_id: i64,
    pub device_ip: String,
    pub offline: bool,
    pub online: bool,
}

pub type MonitorSwiftDevices = Vec<MonitorSwiftDevice>;

// =============================================================================
// Management Endpoint
// =============================================================================

/// The management endpoint reported in a `MonitorEndpointUpdate`
///
/// Both fields are omitted from the output when zero and read back as zero
/// when absent, so an id of 0 cannot be told apart from "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorManagementEndpoint {
    #[serde(skip_serializing_if = "is_zero")]
    pub device_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub interface_id: i64,
}

impl MonitorManagementEndpoint {
    pub fn new(device_id: i64, interface_id: i64) -> Self {
        Self {
            device_id,
            interface_id,
        }
    }

    /// True when neither id is set (serializes as `{}`)
    pub fn is_empty(&self) -> bool {
        self.device_id == 0 && self.interface_id == 0
    }
}

// =============================================================================
// Serde Helpers
// =============================================================================

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
