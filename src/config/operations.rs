//! Config loading and serialization operations.

use super::model::Config;
use crate::error::{BroomError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility. Range/completeness checks happen later, during policy
    /// resolution, because a partial config is legal as long as the request
    /// fills the gaps.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BroomError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| BroomError::ConfigError(format!("failed to parse config YAML: {}", e)))
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BroomError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }
}
