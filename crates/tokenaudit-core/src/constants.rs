//! Shared constants for the design-token auditor.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Canonical token system ----

/// Spacing scale, in px.
pub const SPACING_SCALE: &[u32] = &[0, 2, 4, 8, 12, 16, 24, 32, 40, 48];

/// Type scale, in px.
pub const TYPE_SCALE: &[u32] = &[12, 14, 16, 18, 20, 24, 28, 32, 42, 54, 76];

/// Root font size used to convert `rem` to px.
///
/// Projects that change the root font size will see false positives; the
/// conversion does not try to discover the real value.
pub const REM_BASE_PX: f64 = 16.0;

/// Allowed font family entries, lowercase. Matched by substring.
pub const ALLOWED_FONTS: &[&str] = &[
    "ibm plex sans",
    "ibm plex mono",
    "ibm plex serif",
    "helvetica neue",
    "arial",
    "sans-serif",
    "serif",
    "monospace",
    "inherit",
    "var(--font-sans)",
    "var(--font-mono)",
];

/// CSS properties whose px values must sit on the spacing scale.
pub const SPACING_PROPERTIES: &[&str] = &[
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "gap",
    "row-gap",
    "column-gap",
    "top",
    "right",
    "bottom",
    "left",
];

// ---- Traversal ----

/// Directory name fragments that are never descended into.
/// Matched by substring against the directory's base name.
pub const IGNORE_DIRS: &[&str] = &[
    "node_modules",
    "venv",
    ".venv",
    "env",
    "dist",
    "build",
    "out",
    ".git",
    ".idea",
    ".vscode",
    "__pycache__",
    "governance",
    ".governance",
    "starlight-governance-kit",
];

/// Prefix marking a hidden directory.
pub const HIDDEN_PREFIX: char = '.';

/// Extensions inspected for hardcoded hex colors.
pub const HEX_EXTENSIONS: &[&str] = &[".css", ".scss", ".js", ".ts", ".tsx", ".py"];

/// Extensions inspected for font, spacing and typography declarations.
pub const STYLE_EXTENSIONS: &[&str] = &[".css", ".scss", ".html"];

// ---- Scoring & reporting ----

/// Score lost per individual violation.
pub const SCORE_PENALTY_PER_VIOLATION: u32 = 2;

/// Maximum compliance score.
pub const MAX_SCORE: u32 = 100;

/// Entries kept per list in the evidence document.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Entries shown per list in the console summary.
pub const CONSOLE_PREVIEW_LIMIT: usize = 5;

/// Fingerprint returned when the tokens directory is missing.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Evidence document file name.
pub const EVIDENCE_FILE: &str = "compliance-evidence.json";

/// Execution log file name.
pub const EXECUTION_LOG_FILE: &str = "execution_log.json";

/// Validator entry point whose presence is reported in the evidence.
pub const VALIDATOR_ENTRY: &str = "validate-tokens.ts";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "tokenaudit.toml";

// ---- Paths ----

/// Default project root, relative to the working directory.
pub const DEFAULT_PROJECT_ROOT: &str = "../../";

/// Default tokens directory, relative to the working directory.
pub const DEFAULT_TOKENS_DIR: &str = "../tokens";

/// Fallback tokens directory used by the validator.
pub const FALLBACK_TOKENS_DIR: &str = "../../.governance/tokens";
