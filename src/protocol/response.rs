//! Response definitions
//!
//! Replies to commands and server-initiated notifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WireError;
use crate::protocol::payload::{
    MonitorAliveDevices, MonitorAliveLinks, MonitorManagementEndpoint,
    MonitorSwiftDevices, MonitorSystemStatusDevices, MonitorTrafficLinks,
};
use crate::registry::{CommandCode, StatusCode};

// =============================================================================
// Command Response
// =============================================================================

/// A reply to a command
///
/// `ErrorMessage` is only present on failure replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandResponse<T> {
    pub op_code: CommandCode,
    #[serde(default)]
    pub status_code: StatusCode,
    pub data: T,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
}

impl<T> CommandResponse<T> {
    pub fn new(op_code: CommandCode, status_code: StatusCode, data: T) -> Self {
        Self {
            op_code,
            status_code,
            data,
            error_message: String::new(),
        }
    }

    /// Request accepted
    pub fn success(op_code: CommandCode, data: T) -> Self {
        Self::new(op_code, StatusCode::Success, data)
    }

    /// Job progress
    pub fn running(op_code: CommandCode, data: T) -> Self {
        Self::new(op_code, StatusCode::Running, data)
    }

    /// Job ended normally
    pub fn stopped(op_code: CommandCode, data: T) -> Self {
        Self::new(op_code, StatusCode::Stop, data)
    }

    pub fn is_failed(&self) -> bool {
        self.status_code == StatusCode::Failed
    }
}

impl<T: Default> CommandResponse<T> {
    /// Job or request failed
    pub fn failed(op_code: CommandCode, message: impl Into<String>) -> Self {
        Self {
            op_code,
            status_code: StatusCode::Failed,
            data: T::default(),
            error_message: message.into(),
        }
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// What a notification did to the resource at its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PatchUpdateAction {
    Create,
    Delete,
    #[default]
    Update,
}

impl PatchUpdateAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PatchUpdateAction::Create => "Create",
            PatchUpdateAction::Delete => "Delete",
            PatchUpdateAction::Update => "Update",
        }
    }
}

impl fmt::Display for PatchUpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchUpdateAction {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Create" => Ok(PatchUpdateAction::Create),
            "Delete" => Ok(PatchUpdateAction::Delete),
            "Update" => Ok(PatchUpdateAction::Update),
            other => Err(WireError::Protocol(format!(
                "Unknown patch update action: {}",
                other
            ))),
        }
    }
}

/// A server-initiated push scoped to a resource path
///
/// Status is always the `Unknown` sentinel (0) on notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Notification<T> {
    pub op_code: CommandCode,
    #[serde(default)]
    pub status_code: StatusCode,
    pub path: String,
    pub action: PatchUpdateAction,
    pub data: T,
}

impl<T> Notification<T> {
    pub fn new(op_code: CommandCode, action: PatchUpdateAction, path: impl Into<String>, data: T) -> Self {
        Self {
            op_code,
            status_code: StatusCode::Unknown,
            path: path.into(),
            action,
            data,
        }
    }

    pub fn update(op_code: CommandCode, path: impl Into<String>, data: T) -> Self {
        Self::new(op_code, PatchUpdateAction::Update, path, data)
    }
}

/// `Projects/{id}/Devices`
pub fn devices_path(project_id: i64) -> String {
    format!("Projects/{}/Devices", project_id)
}

/// `Projects/{id}/Links`
pub fn links_path(project_id: i64) -> String {
    format!("Projects/{}/Links", project_id)
}

/// `Projects/{id}/Endpoint`
pub fn endpoint_path(project_id: i64) -> String {
    format!("Projects/{}/Endpoint", project_id)
}

// =============================================================================
// Monitor Updates
// =============================================================================

pub type AliveDevicesUpdate = Notification<MonitorAliveDevices>;
pub type AliveLinksUpdate = Notification<MonitorAliveLinks>;
pub type SystemStatusUpdate = Notification<MonitorSystemStatusDevices>;
pub type TrafficUpdate = Notification<MonitorTrafficLinks>;
pub type SwiftStatusUpdate = Notification<MonitorSwiftDevices>;
/// `Data` is `null` when the endpoint is withdrawn
pub type EndpointUpdate = Notification<Option<MonitorManagementEndpoint>>;

impl AliveDevicesUpdate {
    pub fn alive_devices(project_id: i64, devices: MonitorAliveDevices) -> Self {
        Self::update(CommandCode::MonitorAliveUpdate, devices_path(project_id), devices)
    }
}

impl AliveLinksUpdate {
    pub fn alive_links(project_id: i64, links: MonitorAliveLinks) -> Self {
        Self::update(CommandCode::MonitorAliveUpdate, links_path(project_id), links)
    }
}

impl SystemStatusUpdate {
    pub fn system_status(project_id: i64, devices: MonitorSystemStatusDevices) -> Self {
        Self::update(CommandCode::MonitorStatusUpdate, devices_path(project_id), devices)
    }
}

impl TrafficUpdate {
    pub fn traffic(project_id: i64, links: MonitorTrafficLinks) -> Self {
        Self::update(CommandCode::MonitorTrafficUpdate, links_path(project_id), links)
    }
}

impl SwiftStatusUpdate {
    pub fn swift_status(project_id: i64, devices: MonitorSwiftDevices) -> Self {
        Self::update(CommandCode::MonitorSwiftStatusUpdate, devices_path(project_id), devices)
    }
}

impl EndpointUpdate {
    pub fn endpoint(project_id: i64, endpoint: MonitorManagementEndpoint) -> Self {
        Self::update(CommandCode::MonitorEndpointUpdate, endpoint_path(project_id), Some(endpoint))
    }

    /// The project no longer has a management link
    pub fn endpoint_removed(project_id: i64) -> Self {
        Self::new(
            CommandCode::MonitorEndpointUpdate,
            PatchUpdateAction::Delete,
            endpoint_path(project_id),
            None,
        )
    }
}
