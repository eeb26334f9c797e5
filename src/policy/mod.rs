//! Request/config merging into a resolved retention policy.
//!
//! Every policy field can be supplied as a static default ([`Config`]) and/or
//! overridden per request ([`RetentionRequest`]). Resolution takes the
//! request value when present, the config value otherwise, then validates the
//! merged result as a whole. An invalid override aborts the run rather than
//! falling back to the default.
//!
//! Requests arrive as typed serde structures, so wrong-typed fields from an
//! external JSON source are rejected at deserialization, before resolution.

#[cfg(test)]
mod tests;

use crate::config::{AgeUnit, Config, FolderRemovalMode, PatternType};
use crate::error::{BroomError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Per-run overrides, typically parsed from a JSON request.
///
/// All fields are optional; absent fields fall back to the static config.
/// Unknown fields are ignored for forward compatibility, but present fields
/// must have the right type or deserialization fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetentionRequest {
    pub base_folder: Option<String>,
    pub pattern_type: Option<PatternType>,
    pub patterns: Option<Vec<String>>,
    pub age: Option<u64>,
    pub age_unit: Option<AgeUnit>,
    pub folder_removal_mode: Option<FolderRemovalMode>,
    pub dry_run: Option<bool>,
    pub report_details: Option<bool>,
}

impl RetentionRequest {
    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BroomError::ConfigError(format!("failed to parse request JSON: {}", e)))
    }
}

/// Immutable, fully-resolved configuration for a single scan.
#[derive(Debug, Clone, PartialEq)]
pub struct RetentionPolicy {
    /// Absolute scan root; never the filesystem root.
    pub base_folder: PathBuf,
    pub pattern_type: PatternType,
    /// Non-empty, ordered pattern list.
    pub patterns: Vec<String>,
    /// Positive threshold amount.
    pub age_amount: u64,
    pub age_unit: AgeUnit,
    pub folder_removal_mode: FolderRemovalMode,
    pub dry_run: bool,
    pub report_details: bool,
}

impl RetentionPolicy {
    /// Merge request overrides over static defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `BroomError::ConfigError` when, after merging:
    /// - the base folder is missing, empty, relative, or the filesystem root
    /// - the age amount is missing or zero
    /// - the pattern list is empty or contains an empty string
    pub fn resolve(config: &Config, request: &RetentionRequest) -> Result<Self> {
        let base_folder = request
            .base_folder
            .clone()
            .or_else(|| config.base_folder.clone());
        let patterns = request
            .patterns
            .clone()
            .unwrap_or_else(|| config.patterns.clone());
        let age_amount = request.age.unwrap_or(config.age);
        let age_unit = request.age_unit.unwrap_or(config.age_unit);

        let policy = Self {
            base_folder: validate_base_folder(base_folder.as_deref())?,
            pattern_type: request.pattern_type.unwrap_or(config.pattern_type),
            patterns: validate_patterns(patterns)?,
            age_amount: validate_age(age_amount, age_unit)?,
            age_unit,
            folder_removal_mode: request
                .folder_removal_mode
                .unwrap_or(config.folder_removal_mode),
            dry_run: request.dry_run.unwrap_or(config.dry_run),
            report_details: request.report_details.unwrap_or(config.report_details),
        };

        Ok(policy)
    }
}

fn validate_base_folder(base_folder: Option<&str>) -> Result<PathBuf> {
    let raw = base_folder.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err(BroomError::ConfigError(
            "specify 'baseFolder' in the request when not set in the config".to_string(),
        ));
    }

    let path = PathBuf::from(raw);
    if !path.is_absolute() {
        return Err(BroomError::ConfigError(format!(
            "'baseFolder' must be an absolute path (got '{}')",
            raw
        )));
    }

    // Resolve `.` and `..` lexically so paths like `/x/..` cannot slip past
    // the root guard below.
    let path = lexical_normalize(&path);

    // A path with no parent is the filesystem root.
    if path.parent().is_none() {
        return Err(BroomError::ConfigError(
            "'baseFolder' must not be the filesystem root".to_string(),
        ));
    }

    Ok(path)
}

/// Normalize a path lexically: drop `.` components and let `..` pop the
/// previous component. Does not touch the filesystem.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, so `/..` stays `/`.
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn validate_patterns(patterns: Vec<String>) -> Result<Vec<String>> {
    if patterns.is_empty() {
        return Err(BroomError::ConfigError(
            "specify at least one entry in 'patterns'".to_string(),
        ));
    }
    if patterns.iter().any(|p| p.trim().is_empty()) {
        return Err(BroomError::ConfigError(
            "'patterns' entries must not be empty".to_string(),
        ));
    }
    Ok(patterns)
}

fn validate_age(age: u64, unit: AgeUnit) -> Result<u64> {
    if age == 0 {
        return Err(BroomError::ConfigError(
            "specify 'age' greater than 0 in the request when not set in the config".to_string(),
        ));
    }
    // The threshold is age * unit-seconds; reject amounts that would not fit.
    if age.checked_mul(unit.seconds()).is_none() {
        return Err(BroomError::ConfigError(format!(
            "'age' of {} {} exceeds the supported threshold range",
            age,
            unit.as_str()
        )));
    }
    Ok(age)
}
