//! Depth-first, post-order tree traversal and deletion.
//!
//! The walker descends fully into each directory before deciding that
//! directory's own fate, so by the time a folder is evaluated every
//! descendant has been deleted-or-kept and recorded in the [`ScanReport`].
//! Folder emptiness is computed against that record, not against a fresh
//! listing alone: a remaining child counts as "gone" iff it was recorded
//! (scheduled for deletion) during this same pass. This is what makes
//! dry-run folder decisions identical to real-run decisions.
//!
//! Filesystem failures during the walk are never fatal. A listing failure
//! skips that subtree, a stat failure skips that entry, and a delete failure
//! leaves the entry in the report; all are reported through the sink and
//! traversal continues with siblings.


use crate::age::AgeClassifier;
use crate::config::FolderRemovalMode;
use crate::pattern::{normalize_path, PatternSet};
use crate::policy::RetentionPolicy;
use crate::report::{ReportEntry, ScanReport};
use crate::sink::Sink;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Physical deletion counters for one walk.
///
/// Counts successful deletions only; recorded-but-not-deleted entries
/// (dry-run, failed deletes) do not appear here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkTotals {
    pub deleted_files: u64,
    pub deleted_folders: u64,
}

/// One depth-first scan over the base folder.
///
/// Holds the per-run collaborators; the mutable state lives in the
/// [`ScanReport`] and [`WalkTotals`] threaded through the recursion.
pub struct TreeWalker<'a> {
    base: &'a Path,
    matcher: &'a PatternSet,
    classifier: &'a AgeClassifier,
    folder_removal_mode: FolderRemovalMode,
    dry_run: bool,
    now: SystemTime,
    sink: &'a dyn Sink,
}

impl<'a> TreeWalker<'a> {
    pub fn new(
        policy: &'a RetentionPolicy,
        matcher: &'a PatternSet,
        classifier: &'a AgeClassifier,
        now: SystemTime,
        sink: &'a dyn Sink,
    ) -> Self {
        Self {
            base: &policy.base_folder,
            matcher,
            classifier,
            folder_removal_mode: policy.folder_removal_mode,
            dry_run: policy.dry_run,
            now,
            sink,
        }
    }

    /// Walk the base folder, populating `report` with every entry that
    /// matched the deletion criteria.
    ///
    /// The base folder itself is never evaluated for removal; only its
    /// descendants are.
    pub fn walk(&self, report: &mut ScanReport) -> WalkTotals {
        let mut totals = WalkTotals::default();
        self.walk_dir(Path::new(""), report, &mut totals);
        totals
    }

    /// Process one directory: visit children in listing order, recursing
    /// into subdirectories before evaluating them (post-order).
    fn walk_dir(&self, rel: &Path, report: &mut ScanReport, totals: &mut WalkTotals) {
        let abs = self.base.join(rel);

        let entries = match fs::read_dir(&abs) {
            Ok(entries) => entries,
            Err(e) => {
                // Listing failure: skip this whole subtree, siblings proceed.
                self.sink
                    .error(&format!("failed to list '{}': {}", abs.display(), e));
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.sink
                        .error(&format!("failed to read entry in '{}': {}", abs.display(), e));
                    continue;
                }
            };

            let child_rel = rel.join(entry.file_name());
            let child_abs = entry.path();

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    // Stat failure (or the entry vanished mid-scan): skip it.
                    self.sink
                        .error(&format!("failed to stat '{}': {}", child_abs.display(), e));
                    continue;
                }
            };

            let mtime = match metadata.modified() {
                Ok(mtime) => mtime,
                Err(e) => {
                    self.sink.error(&format!(
                        "failed to read mtime of '{}': {}",
                        child_abs.display(),
                        e
                    ));
                    continue;
                }
            };
            let age = AgeClassifier::age_seconds(self.now, mtime);

            if metadata.is_dir() {
                self.walk_dir(&child_rel, report, totals);
                self.evaluate_folder(&child_rel, &child_abs, mtime, age, report, totals);
            } else {
                self.evaluate_file(&child_rel, &child_abs, mtime, age, report, totals);
            }
        }
    }

    /// A file is eligible when its age strictly exceeds the threshold and
    /// its relative path matches the pattern set.
    fn evaluate_file(
        &self,
        rel: &Path,
        abs: &Path,
        mtime: SystemTime,
        age: i64,
        report: &mut ScanReport,
        totals: &mut WalkTotals,
    ) {
        if !self.classifier.exceeds(age) {
            return;
        }

        let rel_str = rel_string(rel);
        if !self.matcher.is_match(&rel_str) {
            return;
        }

        report.record_file(ReportEntry {
            path: rel_str,
            mtime: DateTime::<Utc>::from(mtime),
            age,
        });

        if self.dry_run {
            return;
        }

        match fs::remove_file(abs) {
            Ok(()) => totals.deleted_files += 1,
            Err(e) => {
                // The entry stays in the report even though the physical
                // delete failed; only the counter reflects the failure.
                self.sink
                    .error(&format!("failed to delete '{}': {}", abs.display(), e));
            }
        }
    }

    /// Evaluate a fully-visited directory against the folder removal mode.
    fn evaluate_folder(
        &self,
        rel: &Path,
        abs: &Path,
        mtime: SystemTime,
        age: i64,
        report: &mut ScanReport,
        totals: &mut WalkTotals,
    ) {
        match self.folder_removal_mode {
            FolderRemovalMode::None => return,
            FolderRemovalMode::Empty => {}
            FolderRemovalMode::Aged => {
                // The pre-descent mtime is used on purpose: deletions inside
                // the directory during this pass must not refresh its age.
                if !self.classifier.exceeds(age) {
                    return;
                }
            }
        }

        match self.is_effectively_empty(rel, abs, report) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                self.sink
                    .error(&format!("failed to re-list '{}': {}", abs.display(), e));
                return;
            }
        }

        report.record_folder(ReportEntry {
            path: rel_string(rel),
            mtime: DateTime::<Utc>::from(mtime),
            age,
        });

        if self.dry_run {
            return;
        }

        // remove_dir refuses non-empty directories at the syscall level, so
        // a child created behind our back fails here instead of being swept.
        match fs::remove_dir(abs) {
            Ok(()) => totals.deleted_folders += 1,
            Err(e) => {
                self.sink
                    .error(&format!("failed to delete '{}': {}", abs.display(), e));
            }
        }
    }

    /// A directory is effectively empty when every child it still contains
    /// was recorded (file or folder) during this pass.
    fn is_effectively_empty(
        &self,
        rel: &Path,
        abs: &Path,
        report: &ScanReport,
    ) -> std::io::Result<bool> {
        for entry in fs::read_dir(abs)? {
            let entry = entry?;
            let child_rel: PathBuf = rel.join(entry.file_name());
            if !report.is_recorded(&rel_string(&child_rel)) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Relative path as a forward-slash string, the form used for matching and
/// reporting.
fn rel_string(rel: &Path) -> String {
    normalize_path(&rel.to_string_lossy())
}
