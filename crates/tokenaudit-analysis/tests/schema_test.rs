//! Token file validation.

use std::fs;

use proptest::prelude::*;
use serde_json::{json, Value};
use tokenaudit_analysis::schema::{
    resolve_tokens_dir, validate_dir, validate_file, TokenSchema, TokenTier,
};
use tokenaudit_core::errors::SchemaError;

fn nested(depth: usize, leaf: Value) -> Value {
    (0..depth).fold(leaf, |inner, i| json!({ format!("level{i}"): inner }))
}

#[test]
fn validates_a_three_tier_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("1-primitives.json"),
        r##"{"$schema":"./schema.json","tokens":{"color":{"blue":{"60":"#0f62fe"}},"space":{"05":"16px"}}}"##,
    )
    .unwrap();
    fs::write(
        dir.path().join("2-semantic.json"),
        r#"{"description":"Light theme","themes":{"white":{"interactive":"{color.blue.60}"}}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("3-component.json"),
        r#"{"components":{"button":{"shadow":"0 1px rgba(0,0,0,0.3)","bg":"linear-gradient(#fff, #000)"}}}"#,
    )
    .unwrap();
    fs::write(dir.path().join("README.md"), "not a token file").unwrap();

    let report = validate_dir(dir.path()).unwrap();
    assert!(report.passed());
    assert_eq!(report.files.len(), 3);
    let stats = report.stats();
    assert_eq!(stats.hex, 1);
    assert_eq!(stats.unit, 1);
    assert_eq!(stats.reference, 1);
    assert_eq!(stats.function, 1);
    assert_eq!(stats.literal, 1);
    assert_eq!(report.failed_count(), 0);
}

#[test]
fn failures_are_collected_per_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1-primitives.json"), r#"{"tokens":{"a":""}}"#).unwrap();
    fs::write(dir.path().join("2-semantic.json"), "{ broken").unwrap();
    fs::write(dir.path().join("colors.json"), "{}").unwrap();
    fs::write(dir.path().join("3-component.json"), r#"{"components":{"x":"ok"}}"#).unwrap();

    let report = validate_dir(dir.path()).unwrap();
    assert!(!report.passed());
    assert_eq!(report.failed_count(), 3);

    let by_name = |name: &str| report.files.iter().find(|f| f.file_name == name).unwrap();
    assert_eq!(
        by_name("1-primitives.json").errors,
        vec!["tokens.a: String must contain at least 1 character(s)"]
    );
    assert!(by_name("2-semantic.json").errors[0].starts_with("JSON Parse/Read Error: "));
    assert_eq!(by_name("colors.json").errors, vec!["Unknown token file type: colors.json"]);
    assert!(by_name("3-component.json").passed());
}

#[test]
fn deeply_nested_file_is_parsed_and_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let depth = 1_000;
    let text = format!(
        "{{\"tokens\":{}\"#fff\"{}}}",
        "{\"l\":".repeat(depth),
        "}".repeat(depth)
    );
    let path = dir.path().join("1-primitives.json");
    fs::write(&path, text).unwrap();

    let report = validate_file(&path);
    assert!(report.passed(), "{:?}", report.errors);
    assert_eq!(report.stats.hex, 1);
}

#[test]
fn trailing_garbage_after_document_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("1-primitives.json");
    fs::write(&path, r#"{"tokens":{"a":"1px"}} extra"#).unwrap();

    let report = validate_file(&path);
    assert!(report.errors[0].starts_with("JSON Parse/Read Error: "));
}

#[test]
fn missing_tier_key_is_required() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semantic.json");
    fs::write(&path, r#"{"tokens":{}}"#).unwrap();
    assert_eq!(validate_file(&path).errors, vec!["themes: Required"]);
}

#[test]
fn missing_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_dir(&dir.path().join("tokens")).unwrap_err();
    assert!(matches!(err, SchemaError::TokensDirNotFound { .. }));
    assert!(err.to_string().starts_with("Tokens directory not found: "));
}

#[test]
fn fallback_directory_used_only_when_primary_missing() {
    let dir = tempfile::tempdir().unwrap();
    let primary = dir.path().join("tokens");
    let fallback = dir.path().join("governance-tokens");
    assert_eq!(resolve_tokens_dir(&primary, &fallback), fallback);

    fs::create_dir(&primary).unwrap();
    assert_eq!(resolve_tokens_dir(&primary, &fallback), primary);
}

#[test]
fn subdirectories_are_not_validated() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/primitives.json"), "{").unwrap();
    let report = validate_dir(dir.path()).unwrap();
    assert!(report.files.is_empty());
}

proptest! {
    #[test]
    fn any_depth_of_valid_nesting_is_accepted(depth in 1usize..120, leaf in "[a-z#0-9.{}()%-]{1,12}") {
        let doc = json!({ "tokens": nested(depth, Value::String(leaf)) });
        let result = TokenSchema::validate(&doc, TokenTier::Primitive);
        prop_assert!(result.is_ok());
    }

    #[test]
    fn empty_leaf_is_rejected_at_any_depth(depth in 1usize..120) {
        let doc = json!({ "components": nested(depth, Value::String(String::new())) });
        let issues = TokenSchema::validate(&doc, TokenTier::Component).unwrap_err();
        prop_assert_eq!(issues.len(), 1);
        prop_assert_eq!(issues[0].message.as_str(), "String must contain at least 1 character(s)");
        prop_assert_eq!(issues[0].path.split('.').count(), depth + 1);
    }
}
