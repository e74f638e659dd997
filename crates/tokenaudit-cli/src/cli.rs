use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tokenaudit", version, about = "Design-token compliance auditor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project for token drift and write compliance evidence
    Audit(AuditArgs),
    /// Validate the token definition files against the tier schema
    Validate(TokensArgs),
    /// Print the integrity fingerprint of the tokens directory
    Hash(TokensArgs),
}

#[derive(Args, Debug)]
pub struct AuditArgs {
    #[arg(long, help = "Project to scan (default: ../../ from the working directory)")]
    pub project_root: Option<PathBuf>,
    #[arg(long, help = "Token definition directory (default: ../tokens)")]
    pub tokens_dir: Option<PathBuf>,
    #[arg(long, help = "Where the evidence and execution log are written")]
    pub output_dir: Option<PathBuf>,
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(0..=100),
        help = "Fail when the compliance score is below this value"
    )]
    pub min_score: Option<u32>,
    #[arg(long, help = "Run each detector as its own walk in parallel")]
    pub parallel: bool,
    #[arg(long, help = "Print the evidence document instead of the summary")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TokensArgs {
    #[arg(long, help = "Token definition directory (default: ../tokens)")]
    pub tokens_dir: Option<PathBuf>,
}
