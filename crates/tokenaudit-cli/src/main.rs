use std::process::ExitCode;

use clap::Parser;
use tokenaudit_core::AuditErrorCode;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    tokenaudit_core::tracing::init_tracing();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Audit(args) => commands::audit::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Hash(args) => commands::hash::run(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
