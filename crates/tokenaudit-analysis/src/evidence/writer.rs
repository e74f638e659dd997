//! Writing the evidence document.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokenaudit_core::errors::EvidenceError;

use super::types::AuditEvidence;

const INDENT: &[u8] = b"    ";

/// Pretty JSON with a 4-space indent.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, EvidenceError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `evidence` to `path`, replacing any previous file.
pub fn write_evidence(evidence: &AuditEvidence, path: &Path) -> Result<(), EvidenceError> {
    let json = to_pretty_json(evidence)?;
    fs::write(path, json).map_err(|source| EvidenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "evidence written");
    Ok(())
}
