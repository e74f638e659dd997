//! Top-level error for a CLI run.

use super::error_code::{self, AuditErrorCode};
use super::{ConfigError, DetectionError, EvidenceError, ScanError, SchemaError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Evidence error: {0}")]
    Evidence(#[from] EvidenceError),

    #[error("Compliance score {score} is below the required minimum {min_score}")]
    GateFailed { score: u32, min_score: u32 },
}

impl AuditErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Detection(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Evidence(e) => e.error_code(),
            Self::GateFailed { .. } => error_code::GATE_FAILED,
        }
    }
}
