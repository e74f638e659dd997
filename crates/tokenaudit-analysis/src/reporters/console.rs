//! Console reporter: human-readable audit summary.

use tokenaudit_core::constants::CONSOLE_PREVIEW_LIMIT;

use super::Reporter;
use crate::evidence::AuditEvidence;

/// Characters of the tokens hash shown in the summary.
const HASH_PREFIX_LEN: usize = 20;

pub struct ConsoleReporter {
    pub use_color: bool,
    /// Offending values listed per detector.
    pub preview_limit: usize,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            preview_limit: CONSOLE_PREVIEW_LIMIT,
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn preview(&self, values: &[String]) -> String {
        values
            .iter()
            .take(self.preview_limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, evidence: &AuditEvidence) -> Result<String, String> {
        let mut output = String::new();
        let meta = &evidence.project_metadata;
        let hash: String = evidence
            .law_integrity
            .tokens_hash
            .chars()
            .take(HASH_PREFIX_LEN)
            .collect();

        output.push_str(&format!("   Target: {} v{}\n", meta.name, meta.version));
        output.push_str(&format!("   Token Hash: {hash}...\n"));
        output.push_str(&format!("   Validator: {}\n", evidence.validator_output));

        let hex = evidence.forensic_analysis.hardcoded_hex_count;
        let font = &evidence.font_analysis;
        let spacing = &evidence.spacing_analysis;
        let typography = &evidence.typography_analysis;

        let score = evidence.token_usage_summary.compliance_percentage;
        let score_color = if score == 100 { "32" } else if score >= 80 { "33" } else { "31" };
        output.push_str(&format!(
            "\n📊 Compliance Score: {}\n",
            self.paint(score_color, &format!("{score}%"))
        ));

        if hex > 0 {
            output.push_str(&format!("\n⚠️  {hex} hardcoded hex values detected.\n"));
        }
        if font.non_carbon_fonts_count > 0 {
            output.push_str(&format!(
                "\n🔤 {} non-Carbon font(s) detected: {}\n",
                font.non_carbon_fonts_count,
                self.preview(&font.forbidden_fonts)
            ));
        }
        if spacing.invalid_spacing_count > 0 {
            output.push_str(&format!(
                "\n📏 {} non-Carbon spacing(s) detected: {}\n",
                spacing.invalid_spacing_count,
                self.preview(&spacing.invalid_spacings)
            ));
        }
        if typography.invalid_typography_count > 0 {
            output.push_str(&format!(
                "\n🔠 {} non-Carbon font size(s) detected: {}\n",
                typography.invalid_typography_count,
                self.preview(&typography.invalid_sizes)
            ));
        }

        let total = hex
            + font.non_carbon_fonts_count
            + spacing.invalid_spacing_count
            + typography.invalid_typography_count;
        if total == 0 {
            output.push_str(&format!(
                "\n{}\n",
                self.paint("32", "🎉 Perfect compliance! No violations found.")
            ));
        }

        Ok(output)
    }
}
