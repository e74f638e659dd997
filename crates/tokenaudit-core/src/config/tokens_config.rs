//! Token directory configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the token definition files live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokensConfig {
    /// Primary tokens directory. Default: `../tokens`.
    pub tokens_dir: Option<PathBuf>,
    /// Used by the validator when the primary does not exist.
    /// Default: `../../.governance/tokens`.
    pub fallback_tokens_dir: Option<PathBuf>,
}

impl TokensConfig {
    pub fn effective_tokens_dir(&self) -> PathBuf {
        self.tokens_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_TOKENS_DIR))
    }

    pub fn effective_fallback_tokens_dir(&self) -> PathBuf {
        self.fallback_tokens_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::FALLBACK_TOKENS_DIR))
    }
}
