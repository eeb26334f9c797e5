//! CLI argument parsing for broom.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Broom: configurable retention sweeper for directory trees.
///
/// Scans a base folder depth-first and removes files older than a threshold
/// whose relative path matches the configured patterns, optionally removing
/// folders left empty by the same pass. Dry-run mode reports what would be
/// removed without touching anything.
#[derive(Parser, Debug)]
#[command(name = "broom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for broom.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute one retention scan.
    ///
    /// Static defaults come from --config, a full request may be supplied
    /// with --request, and individual flags override both.
    Run(RunArgs),

    /// Resolve and validate the retention policy without scanning.
    ///
    /// Applies exactly the same merging and validation as `run`, prints the
    /// resolved policy, and touches no filesystem entry.
    Check(CheckArgs),
}

/// Policy fields shared by `run` and `check`: config source, request source,
/// and per-field overrides.
#[derive(Parser, Debug, Default)]
pub struct PolicyArgs {
    /// Path to a YAML config file with static defaults.
    #[arg(long)]
    pub config: Option<String>,

    /// Path to a JSON retention request ("-" reads stdin).
    #[arg(long)]
    pub request: Option<String>,

    /// Base folder to scan (absolute, not the filesystem root).
    #[arg(long)]
    pub base_folder: Option<String>,

    /// How patterns are interpreted (glob, regex).
    #[arg(long)]
    pub pattern_type: Option<String>,

    /// Path pattern selecting candidate files (repeatable).
    #[arg(long = "pattern")]
    pub patterns: Vec<String>,

    /// Age threshold amount.
    #[arg(long)]
    pub age: Option<u64>,

    /// Age threshold unit (minutes, hours, days, weeks, months, years).
    #[arg(long)]
    pub age_unit: Option<String>,

    /// Folder removal mode (none, empty, aged).
    #[arg(long = "folders")]
    pub folder_removal_mode: Option<String>,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Compute and report matches without deleting anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Collapse report entries to bare relative paths.
    #[arg(long)]
    pub no_details: bool,

    /// Print the report as JSON instead of a human summary.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
