//! Violation detectors: one per kind of token drift.
//!
//! Each detector implements `Detector`: it names the files it wants and turns
//! a file's text into a list of offending raw values. The walk, the
//! per-run deduplication and the counting live in `DetectorRun`, so all four
//! detectors share exactly one traversal shape.

pub mod font;
pub mod hex;
pub mod registry;
pub mod run;
pub mod spacing;
pub mod traits;
pub mod types;
pub mod typography;

pub use font::FontDetector;
pub use hex::HexDetector;
pub use registry::DetectorRegistry;
pub use run::{scan, DetectorRun};
pub use spacing::SpacingDetector;
pub use traits::Detector;
pub use types::{ScanResult, Violation, ViolationKind};
pub use typography::TypographyDetector;
