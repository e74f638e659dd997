//! Tree-walk configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the scan phase.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Extra directory name fragments to skip, on top of the built-in list.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Extensions checked for hex colors. Default: `.css .scss .js .ts .tsx .py`.
    pub hex_extensions: Option<Vec<String>>,
    /// Extensions checked for font, spacing and typography. Default: `.css .scss .html`.
    pub style_extensions: Option<Vec<String>>,
    /// Run each detector as its own walk on the rayon pool. Default: false.
    pub parallel: Option<bool>,
}

impl ScanConfig {
    pub fn effective_hex_extensions(&self) -> Vec<String> {
        self.hex_extensions
            .clone()
            .unwrap_or_else(|| to_owned(constants::HEX_EXTENSIONS))
    }

    pub fn effective_style_extensions(&self) -> Vec<String> {
        self.style_extensions
            .clone()
            .unwrap_or_else(|| to_owned(constants::STYLE_EXTENSIONS))
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
