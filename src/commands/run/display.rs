//! Human-readable report output for the run command.

use crate::report::{ReportItem, RetentionReport};

/// Print a completed run's report as a human summary.
pub fn print_report(report: &RetentionReport, dry_run: bool) {
    let matched_files = report.report.files.len();
    let matched_folders = report.report.folders.len();

    if matched_files == 0 && matched_folders == 0 {
        println!("Nothing matched the retention policy.");
        return;
    }

    if dry_run {
        println!("Dry-run mode: no changes made.");
        println!();
    }

    if matched_files > 0 {
        println!("Files ({}):", matched_files);
        for item in &report.report.files {
            print_item(item);
        }
    }

    if matched_folders > 0 {
        if matched_files > 0 {
            println!();
        }
        println!("Folders ({}):", matched_folders);
        for item in &report.report.folders {
            print_item(item);
        }
    }

    println!();
    if dry_run {
        println!(
            "Would delete {} file(s) and {} folder(s) under {}.",
            matched_files, matched_folders, report.report.base_folder
        );
    } else {
        println!(
            "Deleted {} file(s) and {} folder(s) under {}.",
            report.deleted_files, report.deleted_folders, report.report.base_folder
        );
        let failed = (matched_files as u64 - report.deleted_files)
            + (matched_folders as u64 - report.deleted_folders);
        if failed > 0 {
            println!("  {} matched item(s) could not be deleted (see errors above).", failed);
        }
    }
}

fn print_item(item: &ReportItem) {
    match item {
        ReportItem::Path(path) => println!("  - {}", path),
        ReportItem::Detailed(entry) => {
            println!(
                "  - {} (mtime: {}, age: {}s)",
                entry.path,
                entry.mtime.format("%Y-%m-%d %H:%M:%S UTC"),
                entry.age
            );
        }
    }
}
