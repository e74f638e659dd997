//! Evidence and execution-log output errors.

use std::path::PathBuf;

use super::error_code::{self, AuditErrorCode};

/// Errors that can occur while hashing tokens or writing evidence.
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("Failed to hash {path}: {source}")]
    Hash {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize evidence: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AuditErrorCode for EvidenceError {
    fn error_code(&self) -> &'static str {
        error_code::EVIDENCE_ERROR
    }
}
