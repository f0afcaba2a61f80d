//! Tests for StatusCode

use std::collections::HashSet;

use mgmtwire::{CodeSpace, StatusCode};

#[test]
fn test_resolve_failed_and_stop() {
    assert_eq!(StatusCode::resolve(1006), StatusCode::Failed);
    assert_eq!(StatusCode::resolve(1005), StatusCode::Stop);
}

#[test]
fn test_resolve_round_trip_all_known() {
    for code in StatusCode::ALL {
        assert_eq!(StatusCode::resolve(code.as_i64()), code);
    }
}

#[test]
fn test_resolve_unregistered_is_unknown() {
    for raw in [1, 201, 404, 1004, 1007, 0x0601, -1006] {
        let code = StatusCode::resolve(raw);
        assert_eq!(code, StatusCode::Unknown, "{} should be unknown", raw);
        assert_eq!(code.name(), "Unknown");
    }
}

#[test]
fn test_unknown_is_zero() {
    assert_eq!(StatusCode::Unknown.as_i64(), 0);
    assert_eq!(StatusCode::default(), StatusCode::Unknown);
}

#[test]
fn test_names_are_unique() {
    let names: HashSet<_> = StatusCode::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names.len(), StatusCode::ALL.len());
}

#[test]
fn test_terminal_statuses() {
    assert!(StatusCode::Stop.is_terminal());
    assert!(StatusCode::Failed.is_terminal());
    assert!(!StatusCode::Running.is_terminal());
    assert!(!StatusCode::Success.is_terminal());
    assert!(!StatusCode::Unknown.is_terminal());
}

#[test]
fn test_display() {
    assert_eq!(StatusCode::Failed.to_string(), "Failed");
    assert_eq!(format!("{:#}", StatusCode::Failed), "Failed (1006)");
}

#[test]
fn test_serde_goes_through_resolution() {
    assert_eq!(serde_json::to_string(&StatusCode::Stop).unwrap(), "1005");
    assert_eq!(serde_json::from_str::<StatusCode>("1006").unwrap(), StatusCode::Failed);
    assert_eq!(serde_json::from_str::<StatusCode>("418").unwrap(), StatusCode::Unknown);
}
