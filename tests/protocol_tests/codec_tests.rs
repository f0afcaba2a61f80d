//! Codec Tests
//!
//! Tests for message encoding/decoding and header peeking.

use std::io::Cursor;

use mgmtwire::protocol::payload::MonitorSwiftDevice;
use mgmtwire::protocol::{CommandRequest, JsonCodec, SwiftStatusUpdate};
use mgmtwire::{CommandCode, Config, StatusCode, WireError};

fn small_codec(max: usize) -> JsonCodec {
    JsonCodec::new(&Config::builder().max_message_size(max).build())
}

// =============================================================================
// Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_encode_decode_request() {
    let codec = JsonCodec::default();
    let request = CommandRequest::for_project(CommandCode::StartMonitor, 8);

    let encoded = codec.encode(&request).unwrap();
    let decoded: CommandRequest = codec.decode(&encoded).unwrap();

    assert_eq!(decoded, request);
}

#[test]
fn test_compact_and_pretty_output() {
    let request = CommandRequest::new(CommandCode::StopMonitor);

    let compact = JsonCodec::default().encode(&request).unwrap();
    assert!(!compact.contains(&b'\n'));

    let pretty_codec = JsonCodec::new(&Config::builder().pretty_json(true).build());
    let pretty = pretty_codec.encode(&request).unwrap();
    assert!(pretty.contains(&b'\n'));

    let decoded: CommandRequest = pretty_codec.decode(&pretty).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn test_decode_invalid_json() {
    let result = JsonCodec::default().decode::<CommandRequest>(b"{not json");
    assert!(matches!(result, Err(WireError::Serialization(_))));
}

// =============================================================================
// Size Limit Tests
// =============================================================================

#[test]
fn test_encode_rejects_oversized_message() {
    let codec = small_codec(32);
    let update = SwiftStatusUpdate::swift_status(1, vec![MonitorSwiftDevice::default(); 4]);

    match codec.encode(&update) {
        Err(WireError::MessageTooLarge { size, max }) => {
            assert!(size > 32);
            assert_eq!(max, 32);
        }
        other => panic!("Expected MessageTooLarge, got {:?}", other),
    }
}

#[test]
fn test_decode_rejects_oversized_message() {
    let codec = small_codec(8);
    let result = codec.decode::<CommandRequest>(br#"{"OpCode": 1537}"#);
    assert!(matches!(result, Err(WireError::MessageTooLarge { .. })));
}

#[test]
fn test_read_message_stops_past_limit() {
    let codec = small_codec(16);

    let fits = codec.read_message(Cursor::new(br#"{"OpCode":1537}"#.to_vec())).unwrap();
    assert_eq!(fits.len(), 15);

    let oversized = vec![b' '; 1024];
    match codec.read_message(Cursor::new(oversized)) {
        Err(WireError::MessageTooLarge { size, max }) => {
            assert_eq!(size, 17);
            assert_eq!(max, 16);
        }
        other => panic!("Expected MessageTooLarge, got {:?}", other),
    }
}

// =============================================================================
// Peek Tests
// =============================================================================

#[test]
fn test_peek_known_command() {
    let codec = JsonCodec::default();
    let message = br#"{"OpCode": 1541, "Path": "Projects/1/Links", "Action": "Update", "Data": []}"#;

    assert_eq!(codec.peek_command(message).unwrap(), CommandCode::MonitorTrafficUpdate);
    assert_eq!(codec.peek_status(message).unwrap(), StatusCode::Unknown);
}

#[test]
fn test_peek_unknown_command_is_not_an_error() {
    let codec = JsonCodec::default();
    let op_code = codec.peek_command(br#"{"OpCode": 39321, "Data": {"Anything": [1, 2]}}"#).unwrap();
    assert_eq!(op_code, CommandCode::Unknown);
}

#[test]
fn test_peek_missing_op_code() {
    let codec = JsonCodec::default();
    let result = codec.peek_command(br#"{"StatusCode": 200}"#);
    assert!(matches!(result, Err(WireError::Protocol(_))));
}

#[test]
fn test_peek_status() {
    let codec = JsonCodec::default();
    let message = br#"{"OpCode": 515, "StatusCode": 1006, "ErrorMessage": "deploy failed"}"#;

    assert_eq!(codec.peek_command(message).unwrap(), CommandCode::StartManufactureDeploy);
    assert_eq!(codec.peek_status(message).unwrap(), StatusCode::Failed);
}

#[test]
fn test_peek_null_status_is_unknown() {
    let codec = JsonCodec::default();
    let message = br#"{"OpCode": 1537, "StatusCode": null, "Data": null}"#;

    assert_eq!(codec.peek_status(message).unwrap(), StatusCode::Unknown);
    assert_eq!(codec.peek_status(br#"{"OpCode": 1537}"#).unwrap(), StatusCode::Unknown);
}

#[test]
fn test_peek_null_op_code_is_missing() {
    let codec = JsonCodec::default();
    let result = codec.peek_command(br#"{"OpCode": null}"#);
    assert!(matches!(result, Err(WireError::Protocol(_))));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());

    let zero = Config::builder().max_message_size(0).build();
    assert!(matches!(zero.validate(), Err(WireError::Config(_))));
}

#[test]
fn test_codec_takes_limit_from_config() {
    assert_eq!(JsonCodec::default().max_message_size(), 4 * 1024 * 1024);
    assert_eq!(small_codec(512).max_message_size(), 512);
}

#[test]
fn test_config_size_in_kb() {
    let config = Config::builder().max_message_kb(64).unwrap().build();
    assert_eq!(config.max_message_size, 64 * 1024);

    let overflow = Config::builder().max_message_kb(usize::MAX);
    assert!(matches!(overflow, Err(WireError::Config(_))));

    let wraps_to_nonzero = Config::builder().max_message_kb(usize::MAX / 1024 + 1);
    assert!(matches!(wraps_to_nonzero, Err(WireError::Config(_))));
}
