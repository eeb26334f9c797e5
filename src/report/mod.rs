//! Scan report accumulation and final report rendering.
//!
//! A [`ScanReport`] is created empty at the start of a run, mutated only by
//! the single in-flight walk, and rendered into the caller-facing
//! [`RetentionReport`] once the walk completes. During the walk it doubles as
//! the record the folder-emptiness check consults: a folder child counts as
//! "gone" iff its relative path was recorded here during this same pass.
//!
//! Report JSON uses camelCase field names to match the request schema.


use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// One matched file or folder, with the detail needed for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// Path relative to the base folder, forward slashes.
    pub path: String,
    /// Modification time of the entry when it was visited.
    pub mtime: DateTime<Utc>,
    /// Computed age in whole seconds at visit time.
    pub age: i64,
}

/// Mutable accumulator for one scan, exclusively owned by the active walk.
#[derive(Debug)]
pub struct ScanReport {
    base_folder: String,
    files: Vec<ReportEntry>,
    folders: Vec<ReportEntry>,
    // Relative paths of everything recorded so far, for the emptiness check.
    recorded: HashSet<String>,
}

impl ScanReport {
    /// Create an empty report for a scan rooted at `base_folder`.
    pub fn new(base_folder: impl Into<String>) -> Self {
        Self {
            base_folder: base_folder.into(),
            files: Vec::new(),
            folders: Vec::new(),
            recorded: HashSet::new(),
        }
    }

    pub fn base_folder(&self) -> &str {
        &self.base_folder
    }

    /// Files that matched the deletion criteria, in visit order.
    pub fn files(&self) -> &[ReportEntry] {
        &self.files
    }

    /// Folders that matched their removal mode, in visit order.
    pub fn folders(&self) -> &[ReportEntry] {
        &self.folders
    }

    /// Record a file that matched the deletion criteria.
    pub fn record_file(&mut self, entry: ReportEntry) {
        self.recorded.insert(entry.path.clone());
        self.files.push(entry);
    }

    /// Record a folder that matched its removal mode.
    pub fn record_folder(&mut self, entry: ReportEntry) {
        self.recorded.insert(entry.path.clone());
        self.folders.push(entry);
    }

    /// Whether a relative path was recorded (file or folder) during this pass.
    ///
    /// This is what makes the post-order emptiness check see deletions that
    /// happened earlier in the same scan, including dry-run "deletions".
    pub fn is_recorded(&self, relative_path: &str) -> bool {
        self.recorded.contains(relative_path)
    }

    /// Render the final report, collapsing entries to bare paths unless
    /// `details` is set.
    pub fn into_view(self, details: bool) -> ReportView {
        let flatten = |entries: Vec<ReportEntry>| -> Vec<ReportItem> {
            entries
                .into_iter()
                .map(|e| {
                    if details {
                        ReportItem::Detailed(e)
                    } else {
                        ReportItem::Path(e.path)
                    }
                })
                .collect()
        };

        ReportView {
            base_folder: self.base_folder,
            files: flatten(self.files),
            folders: flatten(self.folders),
        }
    }
}

/// A report entry as delivered to the consumer: either a bare relative path
/// or the full `{path, mtime, age}` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportItem {
    Path(String),
    Detailed(ReportEntry),
}

impl ReportItem {
    pub fn path(&self) -> &str {
        match self {
            ReportItem::Path(p) => p,
            ReportItem::Detailed(e) => &e.path,
        }
    }
}

/// The caller-facing view of a completed scan's report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub base_folder: String,
    pub files: Vec<ReportItem>,
    pub folders: Vec<ReportItem>,
}

/// Final result of one retention run.
///
/// `deleted_files`/`deleted_folders` count successful physical deletions
/// only, so both are zero in dry-run mode even when the report is populated.
/// An entry whose physical delete failed stays in the report but is not
/// counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionReport {
    pub deleted_files: u64,
    pub deleted_folders: u64,
    pub report: ReportView,
}
