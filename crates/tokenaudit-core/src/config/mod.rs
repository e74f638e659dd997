//! Configuration system for the auditor.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod audit_config;
pub mod gate_config;
pub mod report_config;
pub mod scan_config;
pub mod tokens_config;

pub use audit_config::{AuditConfig, CliOverrides};
pub use gate_config::GateConfig;
pub use report_config::ReportConfig;
pub use scan_config::ScanConfig;
pub use tokens_config::TokensConfig;
