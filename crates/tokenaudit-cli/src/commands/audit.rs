//! `tokenaudit audit`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tokenaudit_analysis::evidence::{
    append_execution_log, validator_exists, write_evidence, EvidenceBuilder, ExecutionEntry,
    ProjectMetadata,
};
use tokenaudit_analysis::integrity::hash_tokens_dir;
use tokenaudit_analysis::reporters::console::ConsoleReporter;
use tokenaudit_analysis::reporters::json::JsonReporter;
use tokenaudit_analysis::reporters::Reporter;
use tokenaudit_analysis::ScanAggregator;
use tokenaudit_core::config::CliOverrides;
use tokenaudit_core::constants::DEFAULT_PROJECT_ROOT;
use tokenaudit_core::errors::{AuditError, EvidenceError};
use tokenaudit_core::AuditConfig;

use crate::cli::AuditArgs;

pub fn run(args: &AuditArgs) -> Result<ExitCode, AuditError> {
    let project_root = resolve(
        args.project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_ROOT)),
    );
    let overrides = CliOverrides {
        tokens_dir: args.tokens_dir.clone(),
        output_dir: args.output_dir.clone(),
        min_score: args.min_score,
        parallel: args.parallel.then_some(true),
    };
    let config = AuditConfig::load(&project_root, Some(&overrides))?;
    let rules = config.rules();
    let tokens_dir = config.tokens.effective_tokens_dir();

    if !args.json {
        println!("🕵️ Token Compliance Audit v{}", tokenaudit_core::constants::VERSION);
        println!("   Project Root: {}", project_root.display());
        println!("   Tokens Dir:   {}\n", tokens_dir.display());
    }

    let metadata = ProjectMetadata::read(&project_root);
    let tokens_hash = hash_tokens_dir(&tokens_dir)?;
    let report = ScanAggregator::new(&rules)
        .parallel(config.scan.effective_parallel())
        .run(&project_root)?;
    for error in report.errors() {
        tracing::warn!(error, "part of the tree was not scanned");
    }

    let evidence = EvidenceBuilder::new(&report, metadata)
        .tokens_hash(tokens_hash)
        .validator_exists(validator_exists(Path::new(".")))
        .preview_limit(config.report.effective_preview_limit())
        .build();

    let output_dir = config.report.effective_output_dir();
    let evidence_path = output_dir.join(config.report.effective_evidence_file());
    let log_path = output_dir.join(config.report.effective_execution_log_file());
    write_evidence(&evidence, &evidence_path)?;
    append_execution_log(&log_path, &ExecutionEntry::from_evidence(&evidence))?;

    let reporter: Box<dyn Reporter> = if args.json {
        Box::new(JsonReporter)
    } else {
        Box::new(ConsoleReporter::new(super::use_color()))
    };
    let rendered = reporter.generate(&evidence).map_err(|message| {
        EvidenceError::Write {
            path: PathBuf::from("<stdout>"),
            source: std::io::Error::other(message),
        }
    })?;
    if args.json {
        println!("{rendered}");
    } else {
        print!("{rendered}");
        println!("\n✅ Evidence collected at: {}", evidence_path.display());
        println!("📋 Execution logged to: {}", log_path.display());
    }

    let score = report.compliance_score;
    if !config.gate.passes(score) {
        return Err(AuditError::GateFailed {
            score,
            min_score: config.gate.min_score.unwrap_or_default(),
        });
    }
    Ok(ExitCode::SUCCESS)
}

/// Absolute form of `path` when it exists; the path as given otherwise.
fn resolve(path: PathBuf) -> PathBuf {
    std::fs::canonicalize(&path).unwrap_or(path)
}
