//! Hardcoded hex colors. Every literal is a violation: colors must come from
//! token references.

use std::sync::LazyLock;

use regex::Regex;
use tokenaudit_core::AuditRules;

use super::traits::Detector;
use super::types::ViolationKind;

/// `#` followed by 3 or 6 hex digits, ending on an ASCII word boundary.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(?:[0-9a-fA-F]{3}){1,2}(?-u:\b)").expect("Invalid hex color regex")
});

pub struct HexDetector<'r> {
    extensions: &'r [String],
}

impl<'r> HexDetector<'r> {
    pub fn new(rules: &'r AuditRules) -> Self {
        Self {
            extensions: &rules.hex_extensions,
        }
    }
}

impl Detector for HexDetector<'_> {
    fn kind(&self) -> ViolationKind {
        ViolationKind::Hex
    }

    fn extensions(&self) -> &[String] {
        self.extensions
    }

    fn extract(&self, content: &str) -> Vec<String> {
        HEX_COLOR
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
