//! Evidence: the compliance record of one audit run and its audit trail.
//!
//! `AuditEvidence` is assembled once per run from the aggregate report, the
//! tokens fingerprint and the project metadata, then written as pretty JSON.
//! Each run also appends one line of history to the execution log.

pub mod builder;
pub mod execution_log;
pub mod metadata;
pub mod types;
pub mod writer;

pub use builder::{validator_exists, validator_note, EvidenceBuilder};
pub use execution_log::{append_execution_log, ExecutionEntry, RunOutcome};
pub use metadata::ProjectMetadata;
pub use types::AuditEvidence;
pub use writer::{to_pretty_json, write_evidence};
