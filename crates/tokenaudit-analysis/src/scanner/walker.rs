//! Depth-first tree walk with per-directory pruning.
//!
//! The walk is best-effort: a directory that cannot be listed, or a file that
//! cannot be read, ends processing of that directory. Everything visited
//! before the failure is kept and the failure is recorded in `WalkStats`.

use std::fs;
use std::path::Path;

use tokenaudit_core::errors::ScanError;
use tokenaudit_core::tracing::metrics;
use walkdir::WalkDir;

use super::path_filter::PathFilter;
use super::types::WalkStats;

/// Receives file contents from a `TreeWalker`.
pub trait FileVisitor {
    /// Whether the visitor wants the text of this file.
    fn wants(&self, path: &Path) -> bool;

    /// Called once per wanted file with its full text (lossy UTF-8).
    fn visit(&mut self, path: &Path, content: &str);
}

/// Walks a directory tree, pruning with a `PathFilter`.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'r> {
    filter: PathFilter<'r>,
}

impl<'r> TreeWalker<'r> {
    pub fn new(filter: PathFilter<'r>) -> Self {
        Self { filter }
    }

    /// Walk `root` and feed every wanted file to `visitor`.
    ///
    /// Entries are visited in file-name order. The root itself is never
    /// filtered; the filter applies to every directory found beneath it.
    pub fn walk(&self, root: &Path, visitor: &mut dyn FileVisitor) -> WalkStats {
        let _span = tracing::debug_span!("walk", root = %root.display()).entered();
        let mut stats = WalkStats::default();
        let mut dirs_skipped = 0;
        let filter = self.filter;

        let mut entries = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let pruned = entry.depth() > 0
                    && entry.file_type().is_dir()
                    && filter.should_skip(&entry.file_name().to_string_lossy());
                if pruned {
                    tracing::trace!(dir = %entry.path().display(), "pruned");
                    dirs_skipped += 1;
                }
                !pruned
            });

        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    record(&mut stats, ScanError::from_io(path, e.into()));
                    continue;
                }
            };
            if entry.file_type().is_dir() || !visitor.wants(entry.path()) {
                continue;
            }
            match fs::read(entry.path()) {
                Ok(bytes) => {
                    stats.files_read += 1;
                    visitor.visit(entry.path(), &String::from_utf8_lossy(&bytes));
                }
                Err(e) => {
                    record(&mut stats, ScanError::from_io(entry.path(), e));
                    entries.skip_current_dir();
                }
            }
        }
        drop(entries);
        stats.dirs_skipped = dirs_skipped;

        tracing::debug!(
            { metrics::FILES_SCANNED } = stats.files_read,
            { metrics::DIRS_SKIPPED } = stats.dirs_skipped,
            { metrics::WALK_ERRORS } = stats.errors.len(),
            "walk complete"
        );
        stats
    }
}

fn record(stats: &mut WalkStats, error: ScanError) {
    tracing::debug!(error = %error, "directory cut short");
    stats.errors.push(error.to_string());
}
