//! The `Detector` trait.

use std::path::Path;

use super::types::ViolationKind;

/// An extraction and classification strategy plugged into the shared walk.
pub trait Detector: Send + Sync {
    fn kind(&self) -> ViolationKind;

    /// File extensions (with the leading dot) this detector inspects.
    fn extensions(&self) -> &[String];

    /// Every offending value in `content`, one entry per violation, in
    /// document order. Compliant values are never returned.
    fn extract(&self, content: &str) -> Vec<String>;

    /// Whether `path` has one of this detector's extensions.
    fn accepts(&self, path: &Path) -> bool {
        has_extension(path, self.extensions())
    }
}

/// Exact, case-sensitive match of the final extension, dot included.
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|accepted| accepted.strip_prefix('.') == Some(ext))
}
