//! End-to-end evidence assembly and output.

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use serde_json::Value;
use tokenaudit_analysis::evidence::{
    append_execution_log, to_pretty_json, validator_exists, write_evidence, EvidenceBuilder,
    ExecutionEntry, ProjectMetadata, RunOutcome,
};
use tokenaudit_analysis::integrity::hash_tokens_dir;
use tokenaudit_analysis::reporters::console::ConsoleReporter;
use tokenaudit_analysis::reporters::{create_reporter, Reporter};
use tokenaudit_analysis::ScanAggregator;
use tokenaudit_core::AuditRules;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn evidence_document_layout() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("shop");
    write(&project, "package.json", r#"{"name":"shop","version":"1.4.0"}"#);
    write(&project, "src/a.css", ".a { color: #fff; font-family: Papyrus; }");
    let tokens = dir.path().join("tokens");
    write(&tokens, "1-primitives.json", r#"{"tokens":{}}"#);

    let report = ScanAggregator::new(AuditRules::shared()).run(&project).unwrap();
    let evidence = EvidenceBuilder::new(&report, ProjectMetadata::read(&project))
        .tokens_hash(hash_tokens_dir(&tokens).unwrap())
        .validator_exists(false)
        .timestamp(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
        .build();

    let json: Value = serde_json::from_str(&to_pretty_json(&evidence).unwrap()).unwrap();
    assert_eq!(json["timestamp"], "2026-03-01T12:00:00.000Z");
    assert_eq!(json["project_metadata"]["name"], "shop");
    assert_eq!(json["project_metadata"]["version"], "1.4.0");
    assert_eq!(json["validator_output"], "Validator not found in current directory");
    assert_eq!(json["token_usage_summary"]["total_tokens_identified"], 1);
    assert_eq!(json["token_usage_summary"]["compliance_percentage"], 96);
    assert_eq!(json["forensic_analysis"]["hardcoded_hex_count"], 1);
    assert_eq!(json["forensic_analysis"]["detached_tokens_detected"], 1);
    assert_eq!(json["font_analysis"]["non_carbon_fonts_count"], 1);
    assert_eq!(json["font_analysis"]["forbidden_fonts"][0], "papyrus");
    assert_eq!(json["spacing_analysis"]["invalid_spacing_count"], 0);
    assert_eq!(json["typography_analysis"]["invalid_sizes"], Value::Array(vec![]));
    assert_eq!(json["law_integrity"]["validator_exists"], false);
    assert!(json["law_integrity"]["tokens_hash"].as_str().unwrap().starts_with("SHA256:"));
}

#[test]
fn keys_keep_declaration_order_and_four_space_indent() {
    let dir = tempfile::tempdir().unwrap();
    let report = ScanAggregator::new(AuditRules::shared()).run(dir.path()).unwrap();
    let evidence = EvidenceBuilder::new(&report, ProjectMetadata::read(dir.path())).build();
    let text = to_pretty_json(&evidence).unwrap();

    assert!(text.contains("\n    \"project_metadata\": {\n        \"name\""));
    let order = [
        "timestamp",
        "project_metadata",
        "validator_output",
        "token_usage_summary",
        "forensic_analysis",
        "font_analysis",
        "spacing_analysis",
        "typography_analysis",
        "law_integrity",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|key| text.find(&format!("\"{key}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.contains("\"tokens_hash\": \"NOT_FOUND\""));
}

#[test]
fn previews_are_capped_but_counts_are_not() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..12 {
        write(dir.path(), &format!("f{i:02}.css"), &format!("a {{ color: #{i:03x}; }}"));
    }
    let report = ScanAggregator::new(AuditRules::shared()).run(dir.path()).unwrap();
    let evidence = EvidenceBuilder::new(&report, ProjectMetadata::read(dir.path())).build();

    assert_eq!(evidence.forensic_analysis.hardcoded_hex_count, 12);
    assert_eq!(evidence.forensic_analysis.suspicious_files.len(), 10);

    let evidence = EvidenceBuilder::new(&report, ProjectMetadata::read(dir.path()))
        .preview_limit(3)
        .build();
    assert_eq!(evidence.forensic_analysis.suspicious_files.len(), 3);
}

#[test]
fn validator_presence_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!validator_exists(dir.path()));
    fs::write(dir.path().join("validate-tokens.ts"), "").unwrap();
    assert!(validator_exists(dir.path()));

    let report = ScanAggregator::new(AuditRules::shared()).run(dir.path()).unwrap();
    let evidence = EvidenceBuilder::new(&report, ProjectMetadata::read(dir.path()))
        .validator_exists(true)
        .build();
    assert_eq!(
        evidence.validator_output,
        "Validator available - run 'npm run validate' for full check"
    );
    assert!(evidence.law_integrity.validator_exists);
}

#[test]
fn written_evidence_and_log_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/a.css", "#abc");
    let report = ScanAggregator::new(AuditRules::shared()).run(dir.path()).unwrap();
    let evidence = EvidenceBuilder::new(&report, ProjectMetadata::read(dir.path())).build();

    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("compliance-evidence.json");
    write_evidence(&evidence, &path).unwrap();
    let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["forensic_analysis"]["hardcoded_hex_count"], 1);

    let entry = ExecutionEntry::from_evidence(&evidence);
    assert_eq!(entry.result, RunOutcome::ViolationsFound);
    assert_eq!(entry.timestamp, evidence.timestamp_string());
    assert_eq!(append_execution_log(&out.path().join("execution_log.json"), &entry).unwrap(), 1);
}

#[test]
fn console_summary_previews_five_values() {
    let dir = tempfile::tempdir().unwrap();
    let css: String = (1..=7).map(|i| format!("a {{ margin: {}px; }}\n", i * 10 + 1)).collect();
    write(dir.path(), "a.css", &css);
    let report = ScanAggregator::new(AuditRules::shared()).run(dir.path()).unwrap();
    let evidence = EvidenceBuilder::new(&report, ProjectMetadata::read(dir.path())).build();

    let text = ConsoleReporter::new(false).generate(&evidence).unwrap();
    assert!(text.contains("Compliance Score: 86%"));
    assert!(text.contains(
        "7 non-Carbon spacing(s) detected: margin: 11px, margin: 21px, margin: 31px, margin: 41px, margin: 51px\n"
    ));
    assert!(!text.contains("Perfect compliance"));
}

#[test]
fn reporters_by_name() {
    assert_eq!(create_reporter("json").unwrap().name(), "json");
    assert_eq!(create_reporter("console").unwrap().name(), "console");
    assert!(create_reporter("sarif").is_none());
}
