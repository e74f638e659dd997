//! Compliance gate configuration.

use serde::{Deserialize, Serialize};

/// Optional pass/fail threshold on the compliance score.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum compliance score (0-100). Unset: the audit only reports.
    pub min_score: Option<u32>,
}

impl GateConfig {
    /// True when `score` satisfies the gate (always true when unset).
    pub fn passes(&self, score: u32) -> bool {
        self.min_score.map_or(true, |min| score >= min)
    }
}
