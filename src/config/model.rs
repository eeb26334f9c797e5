//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Static retention defaults for broom.
///
/// This struct represents the contents of the optional config YAML file.
/// Every field can be overridden per request; fields left unset here and in
/// the request are rejected by policy resolution, not here, so a partial
/// config is valid on its own. Unknown fields in the YAML are ignored for
/// forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory of the scan. No usable default exists, so the field is
    /// optional and must come from here or from the request.
    pub base_folder: Option<String>,

    /// How `patterns` are interpreted (default: glob).
    pub pattern_type: PatternType,

    /// Path patterns selecting candidate files (empty = must be supplied by
    /// the request).
    pub patterns: Vec<String>,

    /// Age threshold amount (0 = must be supplied by the request).
    pub age: u64,

    /// Unit for the age threshold (default: days).
    pub age_unit: AgeUnit,

    /// Whether/when folders themselves are removed (default: none).
    pub folder_removal_mode: FolderRemovalMode,

    /// When true, nothing is deleted; the report shows what would have been.
    pub dry_run: bool,

    /// When true, report entries carry mtime and age; when false they are
    /// collapsed to bare relative paths.
    #[serde(default = "default_true")]
    pub report_details: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_folder: None,
            pattern_type: PatternType::default(),
            patterns: Vec::new(),
            age: 0,
            age_unit: AgeUnit::default(),
            folder_removal_mode: FolderRemovalMode::default(),
            dry_run: false,
            report_details: default_true(),
        }
    }
}
