//! SHA-256 over the token files, in name order.

use std::fmt;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tokenaudit_core::constants::NOT_FOUND;
use tokenaudit_core::errors::EvidenceError;

use crate::schema::token_files;

/// Fingerprint of a tokens directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokensHash {
    /// The directory does not exist.
    NotFound,
    /// Lowercase hex SHA-256 of the concatenated `.json` files.
    Sha256(String),
}

impl fmt::Display for TokensHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokensHash::NotFound => f.write_str(NOT_FOUND),
            TokensHash::Sha256(digest) => write!(f, "SHA256:{digest}"),
        }
    }
}

/// Hash every `*.json` file directly inside `dir`, sorted by name.
///
/// Only the raw bytes are hashed, not the names, so renaming a file without
/// changing the order leaves the fingerprint unchanged, and so does adding
/// an empty file.
pub fn hash_tokens_dir(dir: &Path) -> Result<TokensHash, EvidenceError> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "tokens directory missing");
        return Ok(TokensHash::NotFound);
    }

    let files = token_files(dir).map_err(|source| EvidenceError::Hash {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha256::new();
    for file in &files {
        let bytes = fs::read(file).map_err(|source| EvidenceError::Hash {
            path: file.clone(),
            source,
        })?;
        hasher.update(&bytes);
    }
    let digest = hex::encode(hasher.finalize());

    tracing::debug!(dir = %dir.display(), files = files.len(), "tokens hashed");
    Ok(TokensHash::Sha256(digest))
}
