//! Append-only execution history.
//!
//! The log is a JSON array. Entries written by other tools are preserved as
//! they are; a log that is not a JSON array is discarded and restarted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokenaudit_core::errors::EvidenceError;

use super::types::AuditEvidence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunOutcome {
    Clean,
    ViolationsFound,
}

/// One run in the execution log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEntry {
    pub timestamp: String,
    pub project: String,
    pub result: RunOutcome,
    pub hex_violations: usize,
}

impl ExecutionEntry {
    /// The outcome tracks hardcoded hex colors only.
    pub fn from_evidence(evidence: &AuditEvidence) -> Self {
        let hex = evidence.forensic_analysis.hardcoded_hex_count;
        Self {
            timestamp: evidence.timestamp_string(),
            project: evidence.project_metadata.name.clone(),
            result: if hex == 0 {
                RunOutcome::Clean
            } else {
                RunOutcome::ViolationsFound
            },
            hex_violations: hex,
        }
    }
}

/// Read the log at `path`, append `entry`, write it back. Returns the
/// number of entries now in the log.
pub fn append_execution_log(path: &Path, entry: &ExecutionEntry) -> Result<usize, EvidenceError> {
    let mut log = read_log(path);
    log.push(serde_json::to_value(entry)?);

    let json = serde_json::to_string_pretty(&log)?;
    fs::write(path, json).map_err(|source| EvidenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), entries = log.len(), "execution logged");
    Ok(log.len())
}

fn read_log(path: &Path) -> Vec<Value> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) | Err(_) => {
            tracing::warn!(path = %path.display(), "execution log unreadable, starting a new one");
            Vec::new()
        }
    }
}
