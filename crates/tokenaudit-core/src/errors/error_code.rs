//! Stable error codes surfaced by the CLI.

/// Every error enum implements this to expose a machine-readable code.
pub trait AuditErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const TOKENS_NOT_FOUND: &str = "TOKENS_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EVIDENCE_ERROR: &str = "EVIDENCE_ERROR";
pub const GATE_FAILED: &str = "GATE_FAILED";
