//! JSON reporter: the evidence document exactly as written to disk.

use super::Reporter;
use crate::evidence::{to_pretty_json, AuditEvidence};

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, evidence: &AuditEvidence) -> Result<String, String> {
        to_pretty_json(evidence).map_err(|e| e.to_string())
    }
}
