//! Validating the token files of a directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokenaudit_core::errors::SchemaError;
use tokenaudit_core::tracing::metrics;

use super::types::{TokenStats, TokenTier};
use super::validator::TokenSchema;

/// Outcome for one token file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file_name: String,
    pub tier: Option<TokenTier>,
    /// Rendered failures; empty when the file passed.
    pub errors: Vec<String>,
    pub stats: TokenStats,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome for a whole tokens directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub tokens_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.files.iter().all(FileReport::passed)
    }

    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|f| !f.passed()).count()
    }

    pub fn stats(&self) -> TokenStats {
        self.files.iter().fold(TokenStats::default(), |mut acc, f| {
            acc.hex += f.stats.hex;
            acc.unit += f.stats.unit;
            acc.reference += f.stats.reference;
            acc.function += f.stats.function;
            acc.literal += f.stats.literal;
            acc
        })
    }
}

/// `primary` when it exists, otherwise `fallback`.
pub fn resolve_tokens_dir(primary: &Path, fallback: &Path) -> PathBuf {
    if primary.exists() {
        primary.to_path_buf()
    } else {
        tracing::debug!(
            primary = %primary.display(),
            fallback = %fallback.display(),
            "primary tokens directory missing, using fallback"
        );
        fallback.to_path_buf()
    }
}

/// Regular files named `*.json` directly inside `dir`, sorted by name.
pub fn token_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_json = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".json"));
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Validate one token file; its tier comes from its name.
pub fn validate_file(path: &Path) -> FileReport {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut report = FileReport {
        file_name: file_name.clone(),
        tier: TokenTier::from_file_name(&file_name),
        errors: Vec::new(),
        stats: TokenStats::default(),
    };

    let Some(tier) = report.tier else {
        report
            .errors
            .push(SchemaError::UnknownTier { file_name }.to_string());
        return report;
    };

    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| parse_document(&text).map_err(|e| e.to_string()));
    let document = match parsed {
        Ok(value) => value,
        Err(message) => {
            let error = SchemaError::Unreadable {
                path: path.to_path_buf(),
                message,
            };
            report.errors.push(error.to_string());
            return report;
        }
    };

    match TokenSchema::validate(&document, tier) {
        Ok(doc) => report.stats = doc.stats(),
        Err(issues) => report.errors = issues.iter().map(ToString::to_string).collect(),
    }
    report
}

/// Parse JSON of any nesting depth, growing the stack on demand.
fn parse_document(text: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Validate every token file in `dir`.
///
/// A missing directory is the only hard error; per-file failures are
/// collected in the report.
pub fn validate_dir(dir: &Path) -> Result<ValidationReport, SchemaError> {
    let _span = tracing::info_span!("validate_tokens", dir = %dir.display()).entered();
    if !dir.is_dir() {
        return Err(SchemaError::TokensDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let files = token_files(dir).map_err(|e| SchemaError::Unreadable {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;
    let files: Vec<FileReport> = files.iter().map(|p| validate_file(p)).collect();

    let report = ValidationReport {
        tokens_dir: dir.to_path_buf(),
        files,
    };
    tracing::info!(
        { metrics::TOKEN_FILES_CHECKED } = report.files.len(),
        { metrics::TOKEN_LEAVES } = report.stats().total(),
        failed = report.failed_count(),
        "token validation complete"
    );
    Ok(report)
}
