//! The fixed detector set of an audit.

use tokenaudit_core::errors::DetectionError;
use tokenaudit_core::AuditRules;

use super::font::FontDetector;
use super::hex::HexDetector;
use super::spacing::SpacingDetector;
use super::traits::Detector;
use super::typography::TypographyDetector;

/// All four detectors, built against one rule set, in report order.
pub struct DetectorRegistry<'r> {
    hex: HexDetector<'r>,
    font: FontDetector<'r>,
    spacing: SpacingDetector<'r>,
    typography: TypographyDetector<'r>,
}

impl<'r> DetectorRegistry<'r> {
    pub fn new(rules: &'r AuditRules) -> Result<Self, DetectionError> {
        let registry = Self {
            hex: HexDetector::new(rules),
            font: FontDetector::new(rules),
            spacing: SpacingDetector::new(rules)?,
            typography: TypographyDetector::new(rules),
        };
        for detector in registry.all() {
            if detector.extensions().is_empty() {
                return Err(DetectionError::NoExtensions(detector.kind().to_string()));
            }
        }
        Ok(registry)
    }

    /// Detectors in the order hex, font, spacing, typography.
    pub fn all(&self) -> [&dyn Detector; 4] {
        [&self.hex, &self.font, &self.spacing, &self.typography]
    }
}
