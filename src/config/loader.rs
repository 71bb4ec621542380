//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, Settings, TaxPolicy};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml   # User settings (night window, break rules, defaults)
/// └── tax.yaml        # Jurisdiction tax constants
/// ```
///
/// Both files use `#[serde(default)]` types, so they only need to name the
/// fields they override.
///
/// # Example
///
/// ```no_run
/// use workmate_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Night window starts at {}", loader.config().settings().night_shift_start);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let settings = Self::load_yaml::<Settings>(&settings_path)?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxPolicy>(&tax_path)?;

        info!(path = %path.display(), "loaded engine configuration");

        Ok(Self {
            config: EngineConfig::new(settings, tax),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
