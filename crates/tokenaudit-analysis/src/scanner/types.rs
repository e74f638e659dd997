//! Walk statistics.

use serde::{Deserialize, Serialize};

/// What one walk touched and what went wrong along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkStats {
    /// Files read and handed to the visitor.
    pub files_read: usize,
    /// Directories pruned by the path filter.
    pub dirs_skipped: usize,
    /// Non-fatal failures; each one cut a directory short.
    pub errors: Vec<String>,
}
