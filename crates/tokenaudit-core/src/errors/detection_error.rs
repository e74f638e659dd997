//! Detector construction errors.

use super::error_code::{self, AuditErrorCode};

/// Errors that can occur while building a detector.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Invalid pattern for {detector}: {message}")]
    InvalidPattern { detector: String, message: String },

    #[error("Detector {0} has no file extensions configured")]
    NoExtensions(String),
}

impl AuditErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
