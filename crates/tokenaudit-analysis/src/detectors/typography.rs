//! Font sizes off the type scale.
//!
//! The first px and the first rem value of each `font-size` declaration are
//! checked independently, so one declaration can yield two violations. rem
//! values are converted at the fixed `AuditRules::rem_base_px`.

use std::sync::LazyLock;

use regex::Regex;
use tokenaudit_core::AuditRules;

use super::traits::Detector;
use super::types::ViolationKind;

static FONT_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-size\s*:\s*([^;]+);").expect("Invalid font-size regex")
});

static PX_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*px").expect("Invalid px regex")
});

static REM_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*rem").expect("Invalid rem regex")
});

const SKIPPED_VALUES: &[&str] = &["inherit", "initial"];

pub struct TypographyDetector<'r> {
    rules: &'r AuditRules,
}

impl<'r> TypographyDetector<'r> {
    pub fn new(rules: &'r AuditRules) -> Self {
        Self { rules }
    }

    fn check(&self, value: &str, found: &mut Vec<String>) {
        if let Some(px) = first_number(&PX_VALUE, value) {
            if !self.rules.type_scale.contains(px) {
                found.push(format!("{px}px"));
            }
        }
        if let Some(rem) = first_number(&REM_VALUE, value) {
            let px = self.rules.rem_to_px(rem);
            if !self.rules.type_scale.contains(px) {
                found.push(format!("{rem}rem ({px}px)"));
            }
        }
    }
}

impl Detector for TypographyDetector<'_> {
    fn kind(&self) -> ViolationKind {
        ViolationKind::Typography
    }

    fn extensions(&self) -> &[String] {
        &self.rules.style_extensions
    }

    fn extract(&self, content: &str) -> Vec<String> {
        let mut found = Vec::new();
        for caps in FONT_SIZE.captures_iter(content) {
            let value = caps[1].trim();
            if value.contains("var(") || SKIPPED_VALUES.contains(&value) {
                continue;
            }
            self.check(value, &mut found);
        }
        found
    }
}

fn first_number(pattern: &Regex, value: &str) -> Option<f64> {
    pattern
        .captures(value)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<String> {
        TypographyDetector::new(AuditRules::shared()).extract(content)
    }

    #[test]
    fn on_scale_rem_is_compliant() {
        assert!(extract("h1 { font-size: 1rem; }").is_empty());
        assert!(extract("h1 { font-size: 0.875rem; }").is_empty());
    }

    #[test]
    fn off_scale_rem_reports_px_equivalent() {
        assert_eq!(extract("p { font-size: 1.2rem; }"), vec!["1.2rem (19.2px)"]);
    }

    #[test]
    fn off_scale_px() {
        assert_eq!(extract("p { font-size: 15px; }"), vec!["15px"]);
        assert!(extract("p { font-size: 18px; }").is_empty());
    }

    #[test]
    fn px_and_rem_both_fire_on_one_declaration() {
        assert_eq!(
            extract("p { font-size: clamp(15px, 1.1rem, 2rem); }"),
            vec!["15px", "1.1rem (17.6px)"]
        );
    }

    #[test]
    fn only_first_px_value_is_checked() {
        assert_eq!(extract("p { font-size: max(13px, 15px); }"), vec!["13px"]);
    }

    #[test]
    fn variables_and_keywords_are_skipped() {
        assert!(extract("font-size: var(--type-05); font-size: inherit; font-size: initial;").is_empty());
    }

    #[test]
    fn only_ascii_digits_form_numbers() {
        assert_eq!(extract("p { font-size: \u{0663}5px; }"), vec!["5px"]);
    }

    #[test]
    fn em_and_percent_are_not_checked() {
        assert!(extract("font-size: 1.3em; font-size: 120%;").is_empty());
    }
}
