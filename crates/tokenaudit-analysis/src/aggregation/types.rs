//! Aggregated audit result.

use std::time::Duration;

use serde::Serialize;

use crate::detectors::ScanResult;

/// The four detector results of one run plus the derived score.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub hex: ScanResult,
    pub font: ScanResult,
    pub spacing: ScanResult,
    pub typography: ScanResult,
    pub total_violations: usize,
    pub compliance_score: u32,
    #[serde(skip)]
    pub duration: Duration,
}

impl AggregateReport {
    /// Results in the order hex, font, spacing, typography.
    pub fn results(&self) -> [&ScanResult; 4] {
        [&self.hex, &self.font, &self.spacing, &self.typography]
    }

    pub fn is_clean(&self) -> bool {
        self.total_violations == 0
    }

    /// Distinct non-fatal traversal errors across all detectors.
    pub fn errors(&self) -> Vec<&str> {
        let mut errors: Vec<&str> = Vec::new();
        for result in self.results() {
            for error in &result.errors {
                if !errors.contains(&error.as_str()) {
                    errors.push(error);
                }
            }
        }
        errors
    }
}
