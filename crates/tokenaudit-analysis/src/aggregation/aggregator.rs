//! Drives the detectors over a project root.
//!
//! The default mode is one sequential walk: each accepted file is read once
//! and handed to every detector whose extension list includes it. Parallel
//! mode gives each detector its own walk on the rayon pool. Both produce the
//! same `AggregateReport`.

use std::path::Path;
use std::time::Instant;

use tokenaudit_core::errors::DetectionError;
use tokenaudit_core::tracing::metrics;
use tokenaudit_core::AuditRules;

use super::score::compliance_score;
use super::types::AggregateReport;
use crate::detectors::{self, Detector, DetectorRegistry, DetectorRun, ScanResult};
use crate::scanner::{FileVisitor, PathFilter, TreeWalker};

/// Runs all detectors against one rule set.
pub struct ScanAggregator<'r> {
    rules: &'r AuditRules,
    parallel: bool,
}

impl<'r> ScanAggregator<'r> {
    pub fn new(rules: &'r AuditRules) -> Self {
        Self {
            rules,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scan `root` with every detector.
    ///
    /// Traversal failures never abort the run; they end up in each
    /// `ScanResult::errors`.
    pub fn run(&self, root: &Path) -> Result<AggregateReport, DetectionError> {
        let _span = tracing::info_span!("aggregate", root = %root.display(), parallel = self.parallel)
            .entered();
        let start = Instant::now();

        let registry = DetectorRegistry::new(self.rules)?;
        let filter = PathFilter::new(self.rules);
        let [hex, font, spacing, typography] = if self.parallel {
            run_parallel(&registry, filter, root)
        } else {
            run_shared(&registry, filter, root)
        };

        let total_violations = hex.violation_count
            + font.violation_count
            + spacing.violation_count
            + typography.violation_count;
        let score = compliance_score(total_violations);
        let duration = start.elapsed();

        tracing::info!(
            { metrics::VIOLATION_COUNT } = total_violations,
            { metrics::COMPLIANCE_SCORE } = score,
            { metrics::SCAN_DURATION_MS } = duration.as_millis() as u64,
            "audit scan complete"
        );

        Ok(AggregateReport {
            hex,
            font,
            spacing,
            typography,
            total_violations,
            compliance_score: score,
            duration,
        })
    }
}

/// Fans one file out to every detector run that accepts it.
struct SharedVisitor<'d> {
    runs: [DetectorRun<'d>; 4],
}

impl FileVisitor for SharedVisitor<'_> {
    fn wants(&self, path: &Path) -> bool {
        self.runs.iter().any(|run| run.accepts(path))
    }

    fn visit(&mut self, path: &Path, content: &str) {
        for run in self.runs.iter_mut().filter(|run| run.accepts(path)) {
            run.inspect(path, content);
        }
    }
}

fn run_shared(registry: &DetectorRegistry<'_>, filter: PathFilter<'_>, root: &Path) -> [ScanResult; 4] {
    let mut visitor = SharedVisitor {
        runs: registry.all().map(DetectorRun::new),
    };
    let stats = TreeWalker::new(filter).walk(root, &mut visitor);
    visitor.runs.map(|run| run.finish(&stats))
}

fn run_parallel(
    registry: &DetectorRegistry<'_>,
    filter: PathFilter<'_>,
    root: &Path,
) -> [ScanResult; 4] {
    let [hex, font, spacing, typography] = registry.all();
    let scan = |detector: &dyn Detector| detectors::scan(detector, filter, root);
    let ((hex, font), (spacing, typography)) = rayon::join(
        || rayon::join(|| scan(hex), || scan(font)),
        || rayon::join(|| scan(spacing), || scan(typography)),
    );
    [hex, font, spacing, typography]
}
