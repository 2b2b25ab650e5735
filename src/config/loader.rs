//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::{validate_error_impact_input, validate_throughput_input};
use crate::error::{EngineError, EngineResult};
use crate::models::{ErrorImpactInput, ThroughputInput};

use super::types::{
    CalculatorConfig, CalculatorFile, CalculatorMetadata, FormDefaults, ServerConfig,
};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calculator.yaml  # Metadata and server settings
/// └── defaults.yaml    # Starting values for new calculation rows
/// ```
///
/// # Example
///
/// ```no_run
/// use productivity_impact::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Loaded: {}", loader.metadata().name);
/// # Ok::<(), productivity_impact::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The form defaults fall outside the engines' input domain
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calculator_path = path.join("calculator.yaml");
        let calculator = Self::load_yaml::<CalculatorFile>(&calculator_path)?;

        let defaults_path = path.join("defaults.yaml");
        let defaults = Self::load_yaml::<FormDefaults>(&defaults_path)?;

        let defaults_path_str = defaults_path.display().to_string();
        validate_throughput_input(&defaults.throughput)
            .and_then(|_| validate_error_impact_input(&defaults.error_impact))
            .map_err(|e| EngineError::ConfigParseError {
                path: defaults_path_str,
                message: e.to_string(),
            })?;

        debug!(
            path = %path.display(),
            name = %calculator.metadata.name,
            roles = defaults.roles.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: CalculatorConfig::new(calculator.metadata, calculator.server, defaults),
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

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        self.config.metadata()
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Returns the form defaults.
    pub fn defaults(&self) -> &FormDefaults {
        self.config.defaults()
    }

    /// Returns the starting values for a new throughput row.
    pub fn throughput_defaults(&self) -> &ThroughputInput {
        &self.config.defaults().throughput
    }

    /// Returns the starting values for a new error impact row.
    pub fn error_impact_defaults(&self) -> &ErrorImpactInput {
        &self.config.defaults().error_impact
    }

    /// Returns the role catalogue.
    pub fn roles(&self) -> &[String] {
        &self.config.defaults().roles
    }
}
