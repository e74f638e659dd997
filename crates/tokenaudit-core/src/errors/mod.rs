//! Error handling for the auditor.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod audit_error;
pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod evidence_error;
pub mod scan_error;
pub mod schema_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::AuditErrorCode;
pub use evidence_error::EvidenceError;
pub use scan_error::ScanError;
pub use schema_error::SchemaError;
