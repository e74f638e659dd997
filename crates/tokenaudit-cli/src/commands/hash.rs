//! `tokenaudit hash`

use std::process::ExitCode;

use tokenaudit_analysis::integrity::hash_tokens_dir;
use tokenaudit_core::config::CliOverrides;
use tokenaudit_core::errors::AuditError;

use crate::cli::TokensArgs;

/// Prints `SHA256:<hex>`, or `NOT_FOUND` for a missing directory.
pub fn run(args: &TokensArgs) -> Result<ExitCode, AuditError> {
    let overrides = CliOverrides {
        tokens_dir: args.tokens_dir.clone(),
        ..Default::default()
    };
    let config = super::tokens_config(&overrides)?;
    let hash = hash_tokens_dir(&config.tokens.effective_tokens_dir())?;
    println!("{hash}");
    Ok(ExitCode::SUCCESS)
}
