//! Reporters: renderings of the evidence record and the validation report.

pub mod console;
pub mod json;
pub mod validation;

use crate::evidence::AuditEvidence;

/// Trait for evidence rendering.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, evidence: &AuditEvidence) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}
