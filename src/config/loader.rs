//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::AppConfig;

/// Loads the application configuration.
///
/// # Example
///
/// ```
/// use payroll_roster::config::{ConfigLoader, DisplayFormat};
///
/// let loader = ConfigLoader::from_yaml_str("display:\n  format: json\n", "inline")?;
/// assert_eq!(loader.config().display.format, DisplayFormat::Json);
/// # Ok::<(), payroll_roster::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if it is not valid configuration YAML
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> PayrollResult<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
