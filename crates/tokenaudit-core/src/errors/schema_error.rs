//! Token-file validation errors.

use std::path::PathBuf;

use super::error_code::{self, AuditErrorCode};

/// Fatal and per-file failures of token validation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Tokens directory not found: {path}")]
    TokensDirNotFound { path: PathBuf },

    #[error("Unknown token file type: {file_name}")]
    UnknownTier { file_name: String },

    #[error("JSON Parse/Read Error: {message}")]
    Unreadable { path: PathBuf, message: String },
}

impl AuditErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TokensDirNotFound { .. } => error_code::TOKENS_NOT_FOUND,
            _ => error_code::SCHEMA_ERROR,
        }
    }
}
