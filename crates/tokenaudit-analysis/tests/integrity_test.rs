//! Tokens directory fingerprint.

use std::fs;

use tokenaudit_analysis::integrity::{hash_tokens_dir, TokensHash};

fn seeded() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1-primitives.json"), r##"{"tokens":{"a":"#000"}}"##).unwrap();
    fs::write(dir.path().join("2-semantic.json"), r#"{"themes":{"b":"{a}"}}"#).unwrap();
    dir
}

fn hash(dir: &tempfile::TempDir) -> String {
    hash_tokens_dir(dir.path()).unwrap().to_string()
}

#[test]
fn hash_is_deterministic() {
    let dir = seeded();
    let first = hash(&dir);
    assert!(first.starts_with("SHA256:"));
    assert_eq!(first.len(), "SHA256:".len() + 64);
    assert_eq!(first, hash(&dir));
}

#[test]
fn identical_contents_hash_identically_across_directories() {
    assert_eq!(hash(&seeded()), hash(&seeded()));
}

#[test]
fn adding_a_file_changes_the_hash() {
    let dir = seeded();
    let before = hash(&dir);
    fs::write(dir.path().join("3-component.json"), r#"{"components":{}}"#).unwrap();
    assert_ne!(before, hash(&dir));
}

#[test]
fn empty_file_contributes_nothing() {
    let dir = seeded();
    let before = hash(&dir);
    fs::write(dir.path().join("0-empty.json"), "").unwrap();
    assert_eq!(before, hash(&dir));
}

#[test]
fn removing_a_file_changes_the_hash() {
    let dir = seeded();
    let before = hash(&dir);
    fs::remove_file(dir.path().join("2-semantic.json")).unwrap();
    assert_ne!(before, hash(&dir));
}

#[test]
fn modifying_a_file_changes_the_hash() {
    let dir = seeded();
    let before = hash(&dir);
    fs::write(dir.path().join("1-primitives.json"), r##"{"tokens":{"a":"#001"}}"##).unwrap();
    assert_ne!(before, hash(&dir));
}

#[test]
fn non_json_and_nested_files_are_ignored() {
    let dir = seeded();
    let before = hash(&dir);
    fs::write(dir.path().join("notes.md"), "x").unwrap();
    fs::create_dir(dir.path().join("archive")).unwrap();
    fs::write(dir.path().join("archive/old.json"), "{}").unwrap();
    assert_eq!(before, hash(&dir));
}

#[test]
fn missing_directory_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        hash_tokens_dir(&dir.path().join("tokens")).unwrap(),
        TokensHash::NotFound
    );
}
