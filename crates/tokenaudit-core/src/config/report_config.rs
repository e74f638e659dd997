//! Evidence and log output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for evidence output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Entries kept per list in the evidence. Default: 10.
    pub preview_limit: Option<usize>,
    /// Directory receiving the evidence and the execution log. Default: working directory.
    pub output_dir: Option<PathBuf>,
    /// Evidence file name. Default: `compliance-evidence.json`.
    pub evidence_file: Option<String>,
    /// Execution log file name. Default: `execution_log.json`.
    pub execution_log_file: Option<String>,
}

impl ReportConfig {
    pub fn effective_preview_limit(&self) -> usize {
        self.preview_limit.unwrap_or(constants::DEFAULT_PREVIEW_LIMIT)
    }

    pub fn effective_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn effective_evidence_file(&self) -> &str {
        self.evidence_file.as_deref().unwrap_or(constants::EVIDENCE_FILE)
    }

    pub fn effective_execution_log_file(&self) -> &str {
        self.execution_log_file
            .as_deref()
            .unwrap_or(constants::EXECUTION_LOG_FILE)
    }
}
