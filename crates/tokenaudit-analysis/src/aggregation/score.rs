//! Compliance score.

use tokenaudit_core::constants::{MAX_SCORE, SCORE_PENALTY_PER_VIOLATION};

/// `max(0, 100 - 2 × total_violations)`. Exactly 100 with no violations.
pub fn compliance_score(total_violations: usize) -> u32 {
    let penalty = u32::try_from(total_violations)
        .unwrap_or(u32::MAX)
        .saturating_mul(SCORE_PENALTY_PER_VIOLATION);
    MAX_SCORE.saturating_sub(penalty)
}
