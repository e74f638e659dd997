//! The canonical token system every detector checks against.
//!
//! `AuditRules` is built once (from compiled defaults or from `AuditConfig`)
//! and handed to detectors and the path filter by reference. Nothing mutates
//! it after construction.

use std::sync::LazyLock;

use serde::Serialize;

use crate::constants;

/// An ordered set of permitted px values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale(&'static [u32]);

impl Scale {
    pub const SPACING: Scale = Scale(constants::SPACING_SCALE);
    pub const TYPE: Scale = Scale(constants::TYPE_SCALE);

    /// True when `value` is exactly one of the scale steps.
    pub fn contains(&self, value: f64) -> bool {
        self.0.iter().any(|&step| f64::from(step) == value)
    }
}

/// Immutable rule set shared by every scan of a run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRules {
    pub spacing_scale: Scale,
    pub type_scale: Scale,
    pub rem_base_px: f64,
    /// Lowercase allow-list entries, matched by substring.
    pub allowed_fonts: Vec<String>,
    pub spacing_properties: Vec<String>,
    /// Directory name fragments, matched by substring.
    pub ignore_dirs: Vec<String>,
    pub hex_extensions: Vec<String>,
    pub style_extensions: Vec<String>,
}

static CARBON: LazyLock<AuditRules> = LazyLock::new(AuditRules::carbon);

impl AuditRules {
    /// The Carbon-derived defaults.
    pub fn carbon() -> Self {
        Self {
            spacing_scale: Scale::SPACING,
            type_scale: Scale::TYPE,
            rem_base_px: constants::REM_BASE_PX,
            allowed_fonts: to_owned(constants::ALLOWED_FONTS),
            spacing_properties: to_owned(constants::SPACING_PROPERTIES),
            ignore_dirs: to_owned(constants::IGNORE_DIRS),
            hex_extensions: to_owned(constants::HEX_EXTENSIONS),
            style_extensions: to_owned(constants::STYLE_EXTENSIONS),
        }
    }

    /// Process-wide default rules.
    pub fn shared() -> &'static AuditRules {
        &CARBON
    }

    /// Defaults extended with extra ignore fragments.
    pub fn with_extra_ignores<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for fragment in extra {
            let fragment = fragment.into();
            if !fragment.is_empty() && !self.ignore_dirs.contains(&fragment) {
                self.ignore_dirs.push(fragment);
            }
        }
        self
    }

    /// True when `family` (already lowercased and unquoted) contains an
    /// allow-list entry. A family such as `notsans-serif-ish` passes too.
    pub fn is_allowed_font(&self, family: &str) -> bool {
        self.allowed_fonts
            .iter()
            .any(|allowed| family.contains(allowed.as_str()))
    }

    pub fn rem_to_px(&self, rem: f64) -> f64 {
        rem * self.rem_base_px
    }
}

impl Default for AuditRules {
    fn default() -> Self {
        Self::carbon()
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
