//! Envelope Tests
//!
//! Commands, replies and monitor notifications as they appear on the wire.

use mgmtwire::protocol::payload::{
    MonitorAliveDevice, MonitorManagementEndpoint, MonitorSwiftDevice, MonitorTrafficLink,
};
use mgmtwire::protocol::{
    AliveDevicesUpdate, AliveLinksUpdate, CommandRequest, CommandResponse, EndpointUpdate,
    Notification, PatchUpdateAction, SwiftStatusUpdate, TrafficUpdate,
};
use mgmtwire::{CommandCode, StatusCode, WireError};
use serde_json::{json, Value};

// =============================================================================
// Command Requests
// =============================================================================

#[test]
fn test_request_decodes_project_scoped_command() {
    let request: CommandRequest = serde_json::from_str(r#"{"OpCode": 1537, "ProjectId": 12}"#).unwrap();

    assert_eq!(request.op_code, CommandCode::StartMonitor);
    assert_eq!(request.project_id, 12);
    assert!(request.is_recognized());
    assert!(request.has_valid_project());
}

#[test]
fn test_request_with_unknown_op_code_still_decodes() {
    let request: CommandRequest = serde_json::from_str(r#"{"OpCode": 39321}"#).unwrap();

    assert_eq!(request.op_code, CommandCode::Unknown);
    assert!(!request.is_recognized());
    assert_eq!(request.project_id, 0);
}

#[test]
fn test_request_ignores_extra_fields() {
    let json = r#"{"OpCode": 769, "ProjectId": 3, "NewTopology": true}"#;
    let request: CommandRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.op_code, CommandCode::StartScanTopology);
}

#[test]
fn test_request_omits_zero_project_id() {
    let encoded = serde_json::to_string(&CommandRequest::new(CommandCode::TestStart)).unwrap();
    assert_eq!(encoded, r#"{"OpCode":65534}"#);

    let encoded = serde_json::to_string(&CommandRequest::for_project(CommandCode::StopMonitor, 5)).unwrap();
    assert_eq!(encoded, r#"{"OpCode":1538,"ProjectId":5}"#);
}

// =============================================================================
// Command Responses
// =============================================================================

#[test]
fn test_success_response_has_no_error_message() {
    let response: CommandResponse<Option<Value>> = CommandResponse::success(CommandCode::StartMonitor, None);
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value, json!({ "OpCode": 1537, "StatusCode": 200, "Data": null }));
}

#[test]
fn test_failed_response_carries_message() {
    let response: CommandResponse<Option<Value>> =
        CommandResponse::failed(CommandCode::StopMonitor, "failed to stop monitor: invalid project ID");
    let value = serde_json::to_value(&response).unwrap();

    assert!(response.is_failed());
    assert_eq!(value["StatusCode"], 1006);
    assert_eq!(value["ErrorMessage"], "failed to stop monitor: invalid project ID");
}

#[test]
fn test_response_with_unknown_status_decodes() {
    let json = r#"{"OpCode": 769, "StatusCode": 4242, "Data": null}"#;
    let response: CommandResponse<Option<Value>> = serde_json::from_str(json).unwrap();

    assert_eq!(response.op_code, CommandCode::StartScanTopology);
    assert_eq!(response.status_code, StatusCode::Unknown);
    assert!(response.error_message.is_empty());
}

#[test]
fn test_running_and_stopped_constructors() {
    let running = CommandResponse::running(CommandCode::StartScanTopology, 40u32);
    assert_eq!(running.status_code, StatusCode::Running);

    let stopped = CommandResponse::stopped(CommandCode::StartDeploy, ());
    assert_eq!(stopped.status_code, StatusCode::Stop);
    assert!(!stopped.is_failed());
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_traffic_update_shape() {
    let update = TrafficUpdate::traffic(
        1001,
        vec![MonitorTrafficLink {
            link_id: 4,
            speed: 100,
            ..Default::default()
        }],
    );
    let value = serde_json::to_value(&update).unwrap();

    assert_eq!(value["OpCode"], 0x0605);
    assert_eq!(value["StatusCode"], 0);
    assert_eq!(value["Path"], "Projects/1001/Links");
    assert_eq!(value["Action"], "Update");
    assert_eq!(value["Data"][0]["LinkId"], 4);
}

#[test]
fn test_alive_updates_differ_by_path() {
    let devices = AliveDevicesUpdate::alive_devices(
        7,
        vec![MonitorAliveDevice {
            alive: true,
            id: 1,
            ip_address: "10.0.0.1".to_string(),
        }],
    );
    let links = AliveLinksUpdate::alive_links(7, Vec::new());

    assert_eq!(devices.op_code, CommandCode::MonitorAliveUpdate);
    assert_eq!(links.op_code, CommandCode::MonitorAliveUpdate);
    assert_eq!(devices.path, "Projects/7/Devices");
    assert_eq!(links.path, "Projects/7/Links");
}

#[test]
fn test_swift_update_round_trip() {
    let update = SwiftStatusUpdate::swift_status(
        2,
        vec![MonitorSwiftDevice {
            device_id: 9,
            device_ip: "10.0.0.9".to_string(),
            offline: true,
            online: false,
        }],
    );
    let encoded = serde_json::to_string(&update).unwrap();
    let decoded: SwiftStatusUpdate = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, update);
}

#[test]
fn test_endpoint_update_and_removal() {
    let update = EndpointUpdate::endpoint(3, MonitorManagementEndpoint::new(11, 0));
    let value = serde_json::to_value(&update).unwrap();

    assert_eq!(value["Path"], "Projects/3/Endpoint");
    assert_eq!(value["Data"], json!({ "DeviceId": 11 }));

    let removed = EndpointUpdate::endpoint_removed(3);
    let value = serde_json::to_value(&removed).unwrap();

    assert_eq!(value["Action"], "Delete");
    assert_eq!(value["Data"], Value::Null);

    let decoded: EndpointUpdate = serde_json::from_value(value).unwrap();
    assert!(decoded.data.is_none());
    assert_eq!(decoded.action, PatchUpdateAction::Delete);
}

#[test]
fn test_notification_rejects_unknown_action() {
    let json = r#"{"OpCode": 4097, "Path": "Projects/1", "Action": "Rename", "Data": null}"#;
    assert!(serde_json::from_str::<Notification<Option<Value>>>(json).is_err());
}

#[test]
fn test_patch_action_from_str() {
    assert_eq!("Create".parse::<PatchUpdateAction>().unwrap(), PatchUpdateAction::Create);
    assert_eq!(PatchUpdateAction::Delete.to_string(), "Delete");
    assert!(matches!("update".parse::<PatchUpdateAction>(), Err(WireError::Protocol(_))));
}
