//! The evidence document. Field order is the serialized key order.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use super::metadata::ProjectMetadata;

#[derive(Debug, Clone, Serialize)]
pub struct AuditEvidence {
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub project_metadata: ProjectMetadata,
    pub validator_output: String,
    pub token_usage_summary: TokenUsageSummary,
    pub forensic_analysis: ForensicAnalysis,
    pub font_analysis: FontAnalysis,
    pub spacing_analysis: SpacingAnalysis,
    pub typography_analysis: TypographyAnalysis,
    pub law_integrity: LawIntegrity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenUsageSummary {
    /// Hardcoded hex literals found; each one should have been a token.
    pub total_tokens_identified: usize,
    pub compliance_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForensicAnalysis {
    pub hardcoded_hex_count: usize,
    pub detached_tokens_detected: usize,
    pub suspicious_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontAnalysis {
    pub non_carbon_fonts_count: usize,
    pub forbidden_fonts: Vec<String>,
    pub files_with_font_violations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpacingAnalysis {
    pub invalid_spacing_count: usize,
    pub invalid_spacings: Vec<String>,
    pub files_with_spacing_violations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypographyAnalysis {
    pub invalid_typography_count: usize,
    pub invalid_sizes: Vec<String>,
    pub files_with_typography_violations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawIntegrity {
    pub validator_exists: bool,
    pub tokens_hash: String,
}

impl AuditEvidence {
    /// The run timestamp as serialized, e.g. `2026-01-31T09:15:00.123Z`.
    pub fn timestamp_string(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn iso_millis<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(timestamp))
}
