//! Assembling `AuditEvidence` from the results of a run.

use std::path::Path;

use chrono::{DateTime, Utc};
use tokenaudit_core::constants::{DEFAULT_PREVIEW_LIMIT, VALIDATOR_ENTRY};

use super::metadata::ProjectMetadata;
use super::types::{
    AuditEvidence, FontAnalysis, ForensicAnalysis, LawIntegrity, SpacingAnalysis,
    TokenUsageSummary, TypographyAnalysis,
};
use crate::aggregation::AggregateReport;
use crate::integrity::TokensHash;

const VALIDATOR_AVAILABLE: &str = "Validator available - run 'npm run validate' for full check";
const VALIDATOR_MISSING: &str = "Validator not found in current directory";

/// True when the validator entry file exists in `dir`.
pub fn validator_exists(dir: &Path) -> bool {
    dir.join(VALIDATOR_ENTRY).exists()
}

pub fn validator_note(exists: bool) -> &'static str {
    if exists {
        VALIDATOR_AVAILABLE
    } else {
        VALIDATOR_MISSING
    }
}

/// Collects the inputs of an `AuditEvidence`.
pub struct EvidenceBuilder<'a> {
    report: &'a AggregateReport,
    metadata: ProjectMetadata,
    tokens_hash: TokensHash,
    validator_exists: bool,
    preview_limit: usize,
    timestamp: Option<DateTime<Utc>>,
}

impl<'a> EvidenceBuilder<'a> {
    pub fn new(report: &'a AggregateReport, metadata: ProjectMetadata) -> Self {
        Self {
            report,
            metadata,
            tokens_hash: TokensHash::NotFound,
            validator_exists: false,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            timestamp: None,
        }
    }

    pub fn tokens_hash(mut self, hash: TokensHash) -> Self {
        self.tokens_hash = hash;
        self
    }

    pub fn validator_exists(mut self, exists: bool) -> Self {
        self.validator_exists = exists;
        self
    }

    /// Entries kept per list. Counts are never truncated.
    pub fn preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Fixed timestamp instead of the current time.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn build(self) -> AuditEvidence {
        let limit = self.preview_limit;
        let AggregateReport {
            hex,
            font,
            spacing,
            typography,
            compliance_score,
            ..
        } = self.report;

        AuditEvidence {
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            project_metadata: self.metadata,
            validator_output: validator_note(self.validator_exists).to_string(),
            token_usage_summary: TokenUsageSummary {
                total_tokens_identified: hex.violation_count,
                compliance_percentage: *compliance_score,
            },
            forensic_analysis: ForensicAnalysis {
                hardcoded_hex_count: hex.violation_count,
                detached_tokens_detected: hex.violation_count,
                suspicious_files: hex.file_preview(limit),
            },
            font_analysis: FontAnalysis {
                non_carbon_fonts_count: font.violation_count,
                forbidden_fonts: font.value_preview(limit),
                files_with_font_violations: font.file_preview(limit),
            },
            spacing_analysis: SpacingAnalysis {
                invalid_spacing_count: spacing.violation_count,
                invalid_spacings: spacing.value_preview(limit),
                files_with_spacing_violations: spacing.file_preview(limit),
            },
            typography_analysis: TypographyAnalysis {
                invalid_typography_count: typography.violation_count,
                invalid_sizes: typography.value_preview(limit),
                files_with_typography_violations: typography.file_preview(limit),
            },
            law_integrity: LawIntegrity {
                validator_exists: self.validator_exists,
                tokens_hash: self.tokens_hash.to_string(),
            },
        }
    }
}
