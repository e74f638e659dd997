//! Structured field names used in tracing spans and events.
//!
//! Keeping them in one place lets log queries rely on stable keys.

/// Walker: files read and dispatched to detectors.
pub const FILES_SCANNED: &str = "files_scanned";

/// Walker: directories pruned by the path filter.
pub const DIRS_SKIPPED: &str = "dirs_skipped";

/// Walker: non-fatal traversal failures.
pub const WALK_ERRORS: &str = "walk_errors";

/// Detectors: individual violations found.
pub const VIOLATION_COUNT: &str = "violation_count";

/// Aggregator: final compliance score (0-100).
pub const COMPLIANCE_SCORE: &str = "compliance_score";

/// Aggregator: wall time of the scan phase in milliseconds.
pub const SCAN_DURATION_MS: &str = "scan_duration_ms";

/// Schema: token files checked.
pub const TOKEN_FILES_CHECKED: &str = "token_files_checked";

/// Schema: leaves validated in one document.
pub const TOKEN_LEAVES: &str = "token_leaves";
