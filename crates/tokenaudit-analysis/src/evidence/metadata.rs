//! Project name and version from `package.json`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const PACKAGE_MANIFEST: &str = "package.json";
const UNKNOWN_VERSION: &str = "0.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
}

#[derive(Deserialize)]
struct PackageManifest {
    name: Option<serde_json::Value>,
    version: Option<serde_json::Value>,
}

impl ProjectMetadata {
    /// Read `<root>/package.json`.
    ///
    /// Missing, unreadable or malformed manifests fall back to the root's
    /// directory name and `0.0.0`; so do empty or non-string fields.
    pub fn read(root: &Path) -> Self {
        let fallback_name = dir_name(root);
        let manifest = fs::read_to_string(root.join(PACKAGE_MANIFEST))
            .ok()
            .and_then(|text| match serde_json::from_str::<PackageManifest>(&text) {
                Ok(manifest) => Some(manifest),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring malformed package.json");
                    None
                }
            });

        let (name, version) = match manifest {
            Some(m) => (non_empty(m.name), non_empty(m.version)),
            None => (None, None),
        };
        Self {
            name: name.unwrap_or(fallback_name),
            version: version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        }
    }
}

fn non_empty(value: Option<serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Base name of `root` after resolving `.` and `..`.
fn dir_name(root: &Path) -> String {
    let resolved = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
