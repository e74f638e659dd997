//! tokenaudit-analysis: the scanning and aggregation engine.
//!
//! - `scanner`: directory pruning and the shared depth-first walk
//! - `detectors`: hex, font, spacing and typography violation detectors
//! - `aggregation`: one walk feeding all detectors, plus the compliance score
//! - `schema`: recursive validation of token definition files
//! - `integrity`: SHA-256 fingerprint of the tokens directory
//! - `evidence`: the evidence record, project metadata and execution log
//! - `reporters`: console and JSON renderings

pub mod aggregation;
pub mod detectors;
pub mod evidence;
pub mod integrity;
pub mod reporters;
pub mod scanner;
pub mod schema;

pub use aggregation::{AggregateReport, ScanAggregator};
pub use detectors::{Detector, ScanResult, ViolationKind};
pub use scanner::{PathFilter, TreeWalker};
pub use schema::{TokenSchema, TokenTier};
