//! Config loading, parsing, and validation.

use super::model::Config;
use crate::error::{Result, StencilError};
use std::path::Path;

impl Config {
    /// Load config from a file.
    ///
    /// The format is chosen by extension: `.json` parses as JSON,
    /// anything else as YAML.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(StencilError::IoError)` - File could not be read
    /// * `Err(StencilError::ConfigError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            StencilError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are silently ignored for forward compatibility.
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| StencilError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse config from a JSON string.
    ///
    /// Unknown fields are silently ignored for forward compatibility.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| StencilError::ConfigError(format!("failed to parse config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `template`, when present, must be non-empty
    /// - `output`, when present, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if matches!(self.template.as_deref(), Some("")) {
            return Err(StencilError::ConfigError(
                "config validation failed: template must not be empty".to_string(),
            ));
        }

        if matches!(self.output.as_deref(), Some("")) {
            return Err(StencilError::ConfigError(
                "config validation failed: output must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
