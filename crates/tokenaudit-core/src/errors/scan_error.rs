//! Traversal errors.

use std::path::PathBuf;

use super::error_code::{self, AuditErrorCode};

/// Errors raised while walking a tree or reading a file.
///
/// The walker never propagates these past the directory they occurred in;
/// they end up as non-fatal entries on the scan result.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

impl ScanError {
    /// Wrap an IO error, singling out permission failures.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl AuditErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PermissionDenied { .. } => error_code::PERMISSION_DENIED,
            Self::Io { .. } => error_code::SCAN_ERROR,
        }
    }
}
