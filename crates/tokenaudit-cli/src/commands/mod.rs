//! Command handlers.
//!
//! Each handler resolves configuration, delegates to `tokenaudit-analysis`
//! and owns all terminal output. Handlers return the process exit code;
//! errors are printed by `main` with their stable code.

pub mod audit;
pub mod hash;
pub mod validate;

use std::io::IsTerminal;
use std::path::Path;

use tokenaudit_core::config::CliOverrides;
use tokenaudit_core::errors::AuditError;
use tokenaudit_core::AuditConfig;

/// Configuration for a command that only touches the tokens directory.
/// The project config is looked up in the working directory.
pub(crate) fn tokens_config(overrides: &CliOverrides) -> Result<AuditConfig, AuditError> {
    Ok(AuditConfig::load(Path::new("."), Some(overrides))?)
}

pub(crate) fn use_color() -> bool {
    std::io::stdout().is_terminal()
}
