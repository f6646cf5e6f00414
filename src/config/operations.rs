//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{MutdiffError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MutdiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MutdiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `.mutdiff.yaml` in `dir`
    /// is used when present, and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MutdiffError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            MutdiffError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `max_body_lines` must be positive
    /// - `report_classes` must not be empty
    /// - `results_csv` and `live_status` must not be empty
    pub fn validate(&self) -> Result<()> {
        if self.max_body_lines == 0 {
            return Err(MutdiffError::UserError(
                "config validation failed: max_body_lines must be greater than 0".to_string(),
            ));
        }

        if self.report_classes.is_empty() {
            return Err(MutdiffError::UserError(
                "config validation failed: report_classes must name at least one class"
                    .to_string(),
            ));
        }

        if self.results_csv.trim().is_empty() {
            return Err(MutdiffError::UserError(
                "config validation failed: results_csv must be non-empty".to_string(),
            ));
        }

        if self.live_status.trim().is_empty() {
            return Err(MutdiffError::UserError(
                "config validation failed: live_status must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
