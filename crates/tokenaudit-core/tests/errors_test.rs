//! Tests for the error handling system.

use std::path::PathBuf;

use tokenaudit_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let scan = ScanError::PermissionDenied { path: PathBuf::from("/root/secret") };
    assert_eq!(scan.error_code(), "PERMISSION_DENIED");

    let detection = DetectionError::NoExtensions("hex".into());
    assert_eq!(detection.error_code(), "DETECTION_ERROR");

    let schema = SchemaError::TokensDirNotFound { path: PathBuf::from("../tokens") };
    assert_eq!(schema.error_code(), "TOKENS_NOT_FOUND");

    let schema = SchemaError::UnknownTier { file_name: "colors.json".into() };
    assert_eq!(schema.error_code(), "SCHEMA_ERROR");

    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let evidence = EvidenceError::Write {
        path: PathBuf::from("out.json"),
        source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
    };
    assert_eq!(evidence.error_code(), "EVIDENCE_ERROR");
}

#[test]
fn test_from_conversions_keep_codes() {
    let err: AuditError = SchemaError::TokensDirNotFound { path: PathBuf::from("t") }.into();
    assert!(matches!(err, AuditError::Schema(_)));
    assert_eq!(err.error_code(), "TOKENS_NOT_FOUND");

    let err: AuditError = ConfigError::ValidationFailed {
        field: "gate.min_score".into(),
        message: "must be between 0 and 100".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err = AuditError::GateFailed { score: 40, min_score: 80 };
    assert_eq!(err.error_code(), "GATE_FAILED");
}

#[test]
fn test_coded_string_format() {
    let err = SchemaError::UnknownTier { file_name: "colors.json".into() };
    assert_eq!(err.coded_string(), "[SCHEMA_ERROR] Unknown token file type: colors.json");
}

#[test]
fn test_from_io_singles_out_permission_errors() {
    let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
    assert!(matches!(ScanError::from_io("a", denied), ScanError::PermissionDenied { .. }));

    let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert!(matches!(ScanError::from_io("a", missing), ScanError::Io { .. }));
}

#[test]
fn test_unreadable_token_file_message() {
    let err = SchemaError::Unreadable {
        path: PathBuf::from("1-primitives.json"),
        message: "expected value at line 1 column 1".into(),
    };
    assert_eq!(
        err.to_string(),
        "JSON Parse/Read Error: expected value at line 1 column 1"
    );
}
