//! Console rendering of a token validation run.

use crate::schema::ValidationReport;

const RULE_WIDTH: usize = 40;

pub struct ValidationRenderer {
    pub use_color: bool,
}

impl ValidationRenderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    /// Per-file PASS/FAIL lines, indented errors and the final verdict.
    pub fn render(&self, report: &ValidationReport) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Checking directory: {}\n\nResults:\n",
            report.tokens_dir.display()
        ));

        for file in &report.files {
            if file.passed() {
                output.push_str(&format!("{}  {}\n", self.paint("32", "✔ PASS"), file.file_name));
            } else {
                output.push_str(&format!("{}  {}\n", self.paint("31", "✖ FAIL"), file.file_name));
                for error in &file.errors {
                    output.push_str(&format!("   ↳ {}\n", self.paint("33", error)));
                }
            }
        }

        output.push_str(&format!("\n{}\n\n", "-".repeat(RULE_WIDTH)));
        if report.passed() {
            output.push_str(&self.paint("32", "✨ All Systems Nominal. Governance validation passed."));
        } else {
            output.push_str(&self.paint("31", "🚨 Validation Failed. Governance constraints violated."));
        }
        output.push('\n');
        output
    }
}
