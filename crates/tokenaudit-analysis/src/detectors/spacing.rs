//! Spacing values off the spacing scale.
//!
//! Each property pattern is matched anywhere in the text, so side properties
//! also fire inside longhands: `margin-top: 10px;` counts once for
//! `margin-top` and once for `top`.

use std::sync::LazyLock;

use regex::Regex;
use tokenaudit_core::errors::DetectionError;
use tokenaudit_core::types::collections::SmallVec4;
use tokenaudit_core::{AuditRules, Scale};

use super::traits::Detector;
use super::types::ViolationKind;

static PX_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*px").expect("Invalid px regex")
});

/// Values that never need checking.
const SKIPPED_VALUES: &[&str] = &["auto", "inherit", "0"];

struct PropertyPattern {
    name: String,
    regex: Regex,
}

pub struct SpacingDetector<'r> {
    rules: &'r AuditRules,
    properties: Vec<PropertyPattern>,
}

impl<'r> SpacingDetector<'r> {
    pub fn new(rules: &'r AuditRules) -> Result<Self, DetectionError> {
        let properties = rules
            .spacing_properties
            .iter()
            .map(|name| {
                let pattern = format!(r"(?i){}\s*:\s*([^;]+);", regex::escape(name));
                Regex::new(&pattern)
                    .map(|regex| PropertyPattern {
                        name: name.clone(),
                        regex,
                    })
                    .map_err(|e| DetectionError::InvalidPattern {
                        detector: "spacing".to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules, properties })
    }

    fn scale(&self) -> Scale {
        self.rules.spacing_scale
    }
}

impl Detector for SpacingDetector<'_> {
    fn kind(&self) -> ViolationKind {
        ViolationKind::Spacing
    }

    fn extensions(&self) -> &[String] {
        &self.rules.style_extensions
    }

    fn extract(&self, content: &str) -> Vec<String> {
        let mut found = Vec::new();
        for property in &self.properties {
            for caps in property.regex.captures_iter(content) {
                let value = caps[1].trim();
                if value.contains("var(") || SKIPPED_VALUES.contains(&value) {
                    continue;
                }
                for px in px_values(value) {
                    if !self.scale().contains(px) {
                        found.push(format!("{}: {}px", property.name, px));
                    }
                }
            }
        }
        found
    }
}

fn px_values(value: &str) -> SmallVec4<f64> {
    PX_VALUE
        .captures_iter(value)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .collect()
}
