//! Pattern matching for candidate selection.
//!
//! Compiles the policy's pattern list into a single matcher set applied to
//! relative paths (forward slashes). A path is a match when **any** pattern
//! matches (OR semantics), so pattern order never affects eligibility.
//!
//! # Dialects
//!
//! - **Glob** (globset defaults): `?` matches a single character, `**` spans
//!   separators, and `*` also spans separators because `literal_separator`
//!   is left off. `*.log` therefore matches `.log` files at any depth, the
//!   convenient dialect for retention patterns.
//! - **Regex**: each pattern is compiled unanchored and tested with
//!   contains-match semantics (`Regex::is_match`), not full-match.
//!
//! Compilation fails fast: one unparsable pattern fails the whole set with a
//! `ConfigError`, before any filesystem access.


use crate::config::PatternType;
use crate::error::{BroomError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

/// A compiled set of path matchers with OR semantics.
#[derive(Debug)]
pub enum PatternSet {
    Glob(GlobSet),
    Regex(Vec<Regex>),
}

impl PatternSet {
    /// Compile pattern strings into a matcher set.
    ///
    /// # Errors
    ///
    /// Returns `BroomError::ConfigError` naming the offending pattern when
    /// any string fails to compile.
    pub fn compile(patterns: &[String], pattern_type: PatternType) -> Result<Self> {
        match pattern_type {
            PatternType::Glob => {
                let mut builder = GlobSetBuilder::new();
                for pattern in patterns {
                    let glob = Glob::new(pattern).map_err(|e| {
                        BroomError::ConfigError(format!(
                            "invalid glob pattern '{}': {}",
                            pattern, e
                        ))
                    })?;
                    builder.add(glob);
                }
                let set = builder.build().map_err(|e| {
                    BroomError::ConfigError(format!("failed to build glob set: {}", e))
                })?;
                Ok(PatternSet::Glob(set))
            }
            PatternType::Regex => {
                let mut regexes = Vec::with_capacity(patterns.len());
                for pattern in patterns {
                    let regex = Regex::new(pattern).map_err(|e| {
                        BroomError::ConfigError(format!(
                            "invalid regex pattern '{}': {}",
                            pattern, e
                        ))
                    })?;
                    regexes.push(regex);
                }
                Ok(PatternSet::Regex(regexes))
            }
        }
    }

    /// Whether a relative path matches any pattern in the set.
    ///
    /// The path is normalized to forward slashes before matching.
    pub fn is_match(&self, path: &str) -> bool {
        let normalized = normalize_path(path);
        match self {
            PatternSet::Glob(set) => set.is_match(normalized.as_str()),
            PatternSet::Regex(regexes) => regexes.iter().any(|r| r.is_match(&normalized)),
        }
    }
}

/// Normalize a path string to forward slashes for matching and reporting.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
