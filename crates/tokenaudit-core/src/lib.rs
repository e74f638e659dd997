//! tokenaudit-core: shared foundation for the design-token compliance auditor.
//!
//! - `rules`: the canonical scales, font allow list and ignore list (`AuditRules`)
//! - `config`: TOML configuration with layered resolution
//! - `errors`: one `thiserror` enum per subsystem plus stable error codes
//! - `tracing`: subscriber setup and structured field names
//! - `constants`: compiled defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod rules;
pub mod tracing;
pub mod types;

pub use config::AuditConfig;
pub use errors::{AuditError, AuditErrorCode};
pub use rules::{AuditRules, Scale};
