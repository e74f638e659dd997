//! Font stacks outside the allow list.

use std::sync::LazyLock;

use regex::Regex;
use tokenaudit_core::AuditRules;

use super::traits::Detector;
use super::types::ViolationKind;

static FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-family\s*:\s*([^;]+);").expect("Invalid font-family regex")
});

pub struct FontDetector<'r> {
    rules: &'r AuditRules,
}

impl<'r> FontDetector<'r> {
    pub fn new(rules: &'r AuditRules) -> Self {
        Self { rules }
    }
}

impl Detector for FontDetector<'_> {
    fn kind(&self) -> ViolationKind {
        ViolationKind::Font
    }

    fn extensions(&self) -> &[String] {
        &self.rules.style_extensions
    }

    fn extract(&self, content: &str) -> Vec<String> {
        let mut found = Vec::new();
        for caps in FONT_FAMILY.captures_iter(content) {
            let stack = caps[1].trim().to_lowercase();
            for family in stack.split(',').map(normalize_family) {
                if !self.rules.is_allowed_font(&family) {
                    found.push(family);
                }
            }
        }
        found
    }
}

/// Trim and drop quote characters: `"Comic Sans MS"` -> `comic sans ms`.
fn normalize_family(raw: &str) -> String {
    raw.trim().replace(['\'', '"'], "")
}
