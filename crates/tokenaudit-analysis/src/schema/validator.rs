//! Recursive descent over a parsed JSON token document.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::grammar::classify;
use super::types::{SchemaIssue, TokenDocument, TokenNode, TokenTier};

const EMPTY_STRING: &str = "String must contain at least 1 character(s)";
const NOT_A_TOKEN: &str = "Expected a token value or a nested token group";
const REQUIRED: &str = "Required";

// Stack headroom for the recursive descent; deep documents grow the stack.
const RED_ZONE: usize = 64 * 1024;
const STACK_GROWTH: usize = 1024 * 1024;

/// Validates token documents against one tier's structure.
pub struct TokenSchema;

impl TokenSchema {
    /// Validate `document` as a file of `tier`.
    ///
    /// Every failure in the document is collected; the `Err` is never empty.
    pub fn validate(document: &Value, tier: TokenTier) -> Result<TokenDocument, Vec<SchemaIssue>> {
        let mut issues = Vec::new();

        let Value::Object(root) = document else {
            issues.push(SchemaIssue::new("", expected("object", document)));
            return Err(issues);
        };

        let schema = optional_string(root, "$schema", &mut issues);
        let description = optional_string(root, "description", &mut issues);

        let key = tier.wrapper_key();
        let tree = match root.get(key) {
            None => {
                issues.push(SchemaIssue::new(key, REQUIRED));
                None
            }
            Some(Value::Object(group)) => Some(group_node(group, key, &mut issues)),
            Some(other) => {
                issues.push(SchemaIssue::new(key, expected("object", other)));
                None
            }
        };

        match tree {
            Some(root) if issues.is_empty() => Ok(TokenDocument {
                tier,
                schema,
                description,
                root,
            }),
            _ => Err(issues),
        }
    }
}

fn optional_string(root: &Map<String, Value>, key: &str, issues: &mut Vec<SchemaIssue>) -> Option<String> {
    match root.get(key) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(SchemaIssue::new(key, expected("string", other)));
            None
        }
    }
}

fn group_node(
    group: &Map<String, Value>,
    path: &str,
    issues: &mut Vec<SchemaIssue>,
) -> BTreeMap<String, TokenNode> {
    let mut children = BTreeMap::new();
    for (name, value) in group {
        let child_path = format!("{path}.{name}");
        if let Some(node) = node(value, &child_path, issues) {
            children.insert(name.clone(), node);
        }
    }
    children
}

fn node(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<TokenNode> {
    match value {
        Value::String(raw) => match classify(raw) {
            Some(leaf) => Some(TokenNode::Leaf(leaf)),
            None => {
                issues.push(SchemaIssue::new(path, EMPTY_STRING));
                None
            }
        },
        Value::Object(group) => {
            let children = stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || group_node(group, path, issues));
            Some(TokenNode::Group(children))
        }
        _ => {
            issues.push(SchemaIssue::new(path, NOT_A_TOKEN));
            None
        }
    }
}

fn expected(wanted: &str, got: &Value) -> String {
    format!("Expected {wanted}, received {}", json_type(got))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
