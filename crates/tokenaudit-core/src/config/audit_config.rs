//! Top-level auditor configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GateConfig, ReportConfig, ScanConfig, TokensConfig};
use crate::constants;
use crate::errors::ConfigError;
use crate::rules::AuditRules;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TOKENAUDIT_*`)
/// 3. Project config (`tokenaudit.toml` in the project root)
/// 4. User config (`~/.tokenaudit/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    pub scan: ScanConfig,
    pub tokens: TokensConfig,
    pub report: ReportConfig,
    pub gate: GateConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub tokens_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub min_score: Option<u32>,
    pub parallel: Option<bool>,
}

impl AuditConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AuditConfig) -> Result<(), ConfigError> {
        if config.report.preview_limit == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.preview_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(score) = config.gate.min_score {
            if score > constants::MAX_SCORE {
                return Err(ConfigError::ValidationFailed {
                    field: "gate.min_score".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        for (field, list) in [
            ("scan.hex_extensions", &config.scan.hex_extensions),
            ("scan.style_extensions", &config.scan.style_extensions),
        ] {
            if let Some(exts) = list {
                if let Some(bad) = exts.iter().find(|e| !e.starts_with('.') || e.len() < 2) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("extension {bad:?} must look like \".css\""),
                    });
                }
            }
        }
        Ok(())
    }

    /// Build the immutable rule set for this run.
    pub fn rules(&self) -> AuditRules {
        let mut rules = AuditRules::carbon().with_extra_ignores(self.scan.extra_ignore.iter().cloned());
        rules.hex_extensions = self.scan.effective_hex_extensions();
        rules.style_extensions = self.scan.effective_style_extensions();
        rules
    }

    /// Returns the user config path: `~/.tokenaudit/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".tokenaudit").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AuditConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AuditConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut AuditConfig, other: &AuditConfig) {
        // Scan
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.hex_extensions.is_some() {
            base.scan.hex_extensions = other.scan.hex_extensions.clone();
        }
        if other.scan.style_extensions.is_some() {
            base.scan.style_extensions = other.scan.style_extensions.clone();
        }
        if other.scan.parallel.is_some() {
            base.scan.parallel = other.scan.parallel;
        }

        // Tokens
        if other.tokens.tokens_dir.is_some() {
            base.tokens.tokens_dir = other.tokens.tokens_dir.clone();
        }
        if other.tokens.fallback_tokens_dir.is_some() {
            base.tokens.fallback_tokens_dir = other.tokens.fallback_tokens_dir.clone();
        }

        // Report
        if other.report.preview_limit.is_some() {
            base.report.preview_limit = other.report.preview_limit;
        }
        if other.report.output_dir.is_some() {
            base.report.output_dir = other.report.output_dir.clone();
        }
        if other.report.evidence_file.is_some() {
            base.report.evidence_file = other.report.evidence_file.clone();
        }
        if other.report.execution_log_file.is_some() {
            base.report.execution_log_file = other.report.execution_log_file.clone();
        }

        // Gate
        if other.gate.min_score.is_some() {
            base.gate.min_score = other.gate.min_score;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TOKENAUDIT_TOKENS_DIR`, `TOKENAUDIT_GATE_MIN_SCORE`, etc.
    fn apply_env_overrides(config: &mut AuditConfig) {
        if let Ok(val) = std::env::var("TOKENAUDIT_TOKENS_DIR") {
            config.tokens.tokens_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("TOKENAUDIT_OUTPUT_DIR") {
            config.report.output_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("TOKENAUDIT_PREVIEW_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.report.preview_limit = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOKENAUDIT_GATE_MIN_SCORE") {
            if let Ok(v) = val.parse::<u32>() {
                config.gate.min_score = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOKENAUDIT_SCAN_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.parallel = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AuditConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.tokens_dir {
            config.tokens.tokens_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.output_dir {
            config.report.output_dir = Some(v.clone());
        }
        if let Some(v) = cli.min_score {
            config.gate.min_score = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.scan.parallel = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
