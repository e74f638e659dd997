//! `tokenaudit validate`

use std::process::ExitCode;

use tokenaudit_analysis::reporters::validation::ValidationRenderer;
use tokenaudit_analysis::schema::{resolve_tokens_dir, validate_dir};
use tokenaudit_core::config::CliOverrides;
use tokenaudit_core::errors::AuditError;

use crate::cli::TokensArgs;

pub fn run(args: &TokensArgs) -> Result<ExitCode, AuditError> {
    let overrides = CliOverrides {
        tokens_dir: args.tokens_dir.clone(),
        ..Default::default()
    };
    let config = super::tokens_config(&overrides)?;

    let primary = config.tokens.effective_tokens_dir();
    // An explicit directory is never swapped for the fallback.
    let dir = if args.tokens_dir.is_some() {
        primary
    } else {
        resolve_tokens_dir(&primary, &config.tokens.effective_fallback_tokens_dir())
    };

    println!("\n🔍 Token Schema Validator");
    let report = validate_dir(&dir)?;
    print!("{}", ValidationRenderer::new(super::use_color()).render(&report));

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
