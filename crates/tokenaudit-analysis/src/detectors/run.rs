//! Accumulating one detector's findings across a walk.

use std::path::{Path, PathBuf};

use tokenaudit_core::types::collections::FxHashSet;

use super::traits::Detector;
use super::types::{ScanResult, Violation};
use crate::scanner::{FileVisitor, PathFilter, TreeWalker, WalkStats};

/// A detector plus the evidence it has gathered so far.
pub struct DetectorRun<'d> {
    detector: &'d dyn Detector,
    result: ScanResult,
    seen_values: FxHashSet<String>,
    seen_files: FxHashSet<PathBuf>,
}

impl<'d> DetectorRun<'d> {
    pub fn new(detector: &'d dyn Detector) -> Self {
        Self {
            detector,
            result: ScanResult::empty(detector.kind()),
            seen_values: FxHashSet::default(),
            seen_files: FxHashSet::default(),
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        self.detector.accepts(path)
    }

    /// Run extraction on one file and fold the findings in.
    pub fn inspect(&mut self, path: &Path, content: &str) {
        self.result.files_scanned += 1;
        let found = violations(self.detector, path, content);
        self.record(found);
    }

    fn record(&mut self, violations: Vec<Violation>) {
        self.result.violation_count += violations.len();
        for Violation { value, file, .. } in violations {
            if !self.seen_values.contains(&value) {
                self.seen_values.insert(value.clone());
                self.result.values.push(value);
            }
            if !self.seen_files.contains(&file) {
                self.seen_files.insert(file.clone());
                self.result.files.push(file);
            }
        }
    }

    /// Attach walk failures and hand back the result.
    pub fn finish(mut self, stats: &WalkStats) -> ScanResult {
        self.result.errors = stats.errors.clone();
        tracing::debug!(
            detector = %self.result.kind,
            violation_count = self.result.violation_count,
            files = self.result.files.len(),
            "detector finished"
        );
        self.result
    }
}

/// Every occurrence `detector` extracts from one file.
fn violations(detector: &dyn Detector, path: &Path, content: &str) -> Vec<Violation> {
    let kind = detector.kind();
    detector
        .extract(content)
        .into_iter()
        .map(|value| Violation {
            kind,
            value,
            file: path.to_path_buf(),
        })
        .collect()
}

impl FileVisitor for DetectorRun<'_> {
    fn wants(&self, path: &Path) -> bool {
        self.accepts(path)
    }

    fn visit(&mut self, path: &Path, content: &str) {
        self.inspect(path, content);
    }
}

/// Run one detector over `root` with its configured extensions.
pub fn scan(detector: &dyn Detector, filter: PathFilter<'_>, root: &Path) -> ScanResult {
    let mut run = DetectorRun::new(detector);
    let stats = TreeWalker::new(filter).walk(root, &mut run);
    run.finish(&stats)
}
