//! Command implementations for broom.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared plumbing that turns `PolicyArgs` into a
//! `(Config, RetentionRequest)` pair: YAML config for static defaults, an
//! optional JSON request file, and per-field flag overrides on top.

mod check;
mod run;

use crate::cli::{Command, PolicyArgs};
use crate::config::{AgeUnit, Config, FolderRemovalMode, PatternType};
use crate::error::{BroomError, Result};
use crate::policy::RetentionRequest;
use std::io::Read;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Check(args) => check::cmd_check(args),
    }
}

/// Build the static defaults and the effective request from CLI inputs.
///
/// Precedence, lowest to highest: built-in defaults, `--config` YAML,
/// `--request` JSON, individual flags.
pub(crate) fn resolve_inputs(args: &PolicyArgs) -> Result<(Config, RetentionRequest)> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut request = match &args.request {
        Some(path) => load_request(path)?,
        None => RetentionRequest::default(),
    };

    if let Some(base_folder) = &args.base_folder {
        request.base_folder = Some(base_folder.clone());
    }
    if let Some(raw) = &args.pattern_type {
        request.pattern_type = Some(PatternType::from_str(raw).ok_or_else(|| {
            BroomError::ConfigError(format!(
                "invalid --pattern-type '{}' (expected glob or regex)",
                raw
            ))
        })?);
    }
    if !args.patterns.is_empty() {
        request.patterns = Some(args.patterns.clone());
    }
    if let Some(age) = args.age {
        request.age = Some(age);
    }
    if let Some(raw) = &args.age_unit {
        request.age_unit = Some(AgeUnit::from_str(raw).ok_or_else(|| {
            BroomError::ConfigError(format!(
                "invalid --age-unit '{}' (expected minutes, hours, days, weeks, months or years)",
                raw
            ))
        })?);
    }
    if let Some(raw) = &args.folder_removal_mode {
        request.folder_removal_mode = Some(FolderRemovalMode::from_str(raw).ok_or_else(|| {
            BroomError::ConfigError(format!(
                "invalid --folders '{}' (expected none, empty or aged)",
                raw
            ))
        })?);
    }

    Ok((config, request))
}

/// Load a retention request from a JSON file, or from stdin when the path
/// is `-`.
fn load_request(path: &str) -> Result<RetentionRequest> {
    let json = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| BroomError::IoError(format!("failed to read request from stdin: {}", e)))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            BroomError::IoError(format!("failed to read request file '{}': {}", path, e))
        })?
    };

    RetentionRequest::from_json(&json)
}
