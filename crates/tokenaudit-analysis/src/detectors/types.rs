//! Detector data types.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The four kinds of token drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    Hex,
    Font,
    Spacing,
    Typography,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 4] = [
        ViolationKind::Hex,
        ViolationKind::Font,
        ViolationKind::Spacing,
        ViolationKind::Typography,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ViolationKind::Hex => "hex",
            ViolationKind::Font => "font",
            ViolationKind::Spacing => "spacing",
            ViolationKind::Typography => "typography",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One offending value found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub value: String,
    pub file: PathBuf,
}

/// Outcome of one detector over one tree.
///
/// `values` and `files` are deduplicated within the run and keep first-seen
/// order; `violation_count` counts every occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub kind: ViolationKind,
    pub violation_count: usize,
    pub values: Vec<String>,
    pub files: Vec<PathBuf>,
    pub files_scanned: usize,
    pub errors: Vec<String>,
}

impl ScanResult {
    pub fn empty(kind: ViolationKind) -> Self {
        Self {
            kind,
            violation_count: 0,
            values: Vec::new(),
            files: Vec::new(),
            files_scanned: 0,
            errors: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violation_count == 0
    }

    /// First `limit` distinct offending values.
    pub fn value_preview(&self, limit: usize) -> Vec<String> {
        self.values.iter().take(limit).cloned().collect()
    }

    /// First `limit` distinct offending files.
    pub fn file_preview(&self, limit: usize) -> Vec<String> {
        self.files
            .iter()
            .take(limit)
            .map(|p| p.display().to_string())
            .collect()
    }
}
