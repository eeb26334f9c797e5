//! Implementation of the `broom run` command.
//!
//! Builds a retention request from the config file, optional request file,
//! and CLI flags, runs the engine once, and prints the resulting report.
//!
//! # Safety
//!
//! - `--dry-run` computes and reports matches without deleting anything
//! - Folders are only removed when the resolved policy asks for it, and only
//!   when empty after this pass
//! - The base folder must be absolute and is never the filesystem root

mod display;


use crate::cli::RunArgs;
use crate::commands::resolve_inputs;
use crate::engine::{RetentionEngine, RunOutcome};
use crate::error::{BroomError, Result};

use display::print_report;

/// Execute the `broom run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let (config, mut request) = resolve_inputs(&args.policy)?;

    // The flags are switches, so they only override when set.
    if args.dry_run {
        request.dry_run = Some(true);
    }
    if args.no_details {
        request.report_details = Some(false);
    }

    let dry_run = request.dry_run.unwrap_or(config.dry_run);

    let engine = RetentionEngine::new(config);
    let report = match engine.run(&request)? {
        RunOutcome::Completed(report) => report,
        // A fresh engine executes exactly one run; rejection is unreachable
        // here but the variant must be handled for embedders.
        RunOutcome::Rejected => return Ok(()),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            BroomError::IoError(format!("failed to serialize report to JSON: {}", e))
        })?;
        println!("{}", json);
    } else {
        print_report(&report, dry_run);
    }

    Ok(())
}
