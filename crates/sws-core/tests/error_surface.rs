use sws_core::errors::{ErrorInfo, SwsError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("state", "xxx00")
        .with_context("reason", "example")
}

#[test]
fn graph_error_surface() {
    let err = SwsError::Graph(sample_info("unknown-state", "state not in graph"));
    assert_eq!(err.info().code, "unknown-state");
    assert!(err.info().context.contains_key("state"));
}

#[test]
fn notation_error_surface() {
    let err = sws_core::decode("3x!").unwrap_err();
    assert!(matches!(&err, SwsError::Notation(info) if info.code == "invalid-char"));
    assert_eq!(err.info().context.get("char").map(String::as_str), Some("!"));
}

#[test]
fn encode_range_error_carries_hint() {
    let err = sws_core::encode(&[3, 36]).unwrap_err();
    assert_eq!(err.info().code, "throw-out-of-range");
    assert!(err.info().hint.is_some());
}

#[test]
fn display_lists_context_and_hint() {
    let err = SwsError::Config(
        ErrorInfo::new("period-range", "empty period range")
            .with_context("from", "4")
            .with_context("to", "2")
            .with_hint("swap the bounds"),
    );
    assert_eq!(
        err.to_string(),
        "config error: empty period range (code: period-range) | context: [from=4, to=2] | hint: swap the bounds"
    );
}

#[test]
fn io_helper_wraps_message() {
    let err = SwsError::io("read-input", "file vanished");
    assert!(matches!(&err, SwsError::Io(info) if info.message == "file vanished"));
}

#[test]
fn errors_roundtrip_through_json() {
    let err = SwsError::Serde(sample_info("deserialize-json", "bad payload"));
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"family\":\"Serde\""));
    let restored: SwsError = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, err);
}
