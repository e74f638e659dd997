//! Leaf grammar of token values.

use std::sync::LazyLock;

use regex::Regex;

use super::types::TokenValue;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{3,6}$").expect("Invalid hex token regex"));

static CSS_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+(rem|px|%|em)$").expect("Invalid unit token regex"));

static TOKEN_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{.+\}$").expect("Invalid reference token regex"));

static CSS_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z-]+\(.*\)$").expect("Invalid function token regex"));

/// Classify a leaf string. `None` for the empty string, which is never valid.
pub fn classify(raw: &str) -> Option<TokenValue> {
    if raw.is_empty() {
        return None;
    }
    let owned = raw.to_string();
    let value = if HEX_COLOR.is_match(raw) {
        TokenValue::Hex(owned)
    } else if CSS_UNIT.is_match(raw) {
        TokenValue::Unit(owned)
    } else if TOKEN_REF.is_match(raw) {
        TokenValue::Reference(owned)
    } else if CSS_FUNCTION.is_match(raw) {
        TokenValue::Function(owned)
    } else {
        TokenValue::Literal(owned)
    };
    Some(value)
}
