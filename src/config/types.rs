//! Configuration types and defaults for broom.
//!
//! This module defines the enums shared by the static config, per-request
//! overrides, and the resolved policy, plus serde default-value functions.

use serde::{Deserialize, Serialize};

/// How pattern strings are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    /// Glob patterns (globset semantics), translated to matchers at compile time.
    #[default]
    Glob,
    /// Regular expressions, unanchored (contains-match semantics).
    Regex,
}

impl PatternType {
    /// Parse a pattern type from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "glob" => Some(Self::Glob),
            "regex" => Some(Self::Regex),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Glob => "glob",
            Self::Regex => "regex",
        }
    }
}

/// Unit for the age threshold.
///
/// Months and years use a fixed approximation (30 and 365 days); the
/// conversion is not calendar-aware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    Minutes,
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl AgeUnit {
    /// Parse an age unit from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "minutes" => Some(Self::Minutes),
            "hours" => Some(Self::Hours),
            "days" => Some(Self::Days),
            "weeks" => Some(Self::Weeks),
            "months" => Some(Self::Months),
            "years" => Some(Self::Years),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }

    /// Number of seconds in one unit.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minutes => 60,
            Self::Hours => 60 * 60,
            Self::Days => 60 * 60 * 24,
            Self::Weeks => 60 * 60 * 24 * 7,
            Self::Months => 60 * 60 * 24 * 30,
            Self::Years => 60 * 60 * 24 * 365,
        }
    }
}

/// Policy governing whether/when a directory itself becomes eligible for
/// deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FolderRemovalMode {
    /// Never remove folders (default, safest).
    #[default]
    None,
    /// Remove folders with no remaining children after this pass.
    Empty,
    /// Remove empty folders whose own age also exceeds the threshold.
    Aged,
}

impl FolderRemovalMode {
    /// Parse a folder removal mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "empty" => Some(Self::Empty),
            "aged" => Some(Self::Aged),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Empty => "empty",
            Self::Aged => "aged",
        }
    }
}

// Default value functions for serde
pub(crate) fn default_true() -> bool {
    true
}
