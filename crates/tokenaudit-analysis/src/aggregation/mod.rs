//! Aggregation: all four detectors over one root, plus the compliance score.

pub mod aggregator;
pub mod score;
pub mod types;

pub use aggregator::ScanAggregator;
pub use score::compliance_score;
pub use types::AggregateReport;
