//! Graph configuration.
//!
//! Provides configuration file support via `multigraph.toml`, environment
//! variables, and programmatic construction.
//!
//! # Priority (highest to lowest)
//!
//! 1. Environment variables (`MULTIGRAPH_*`)
//! 2. Configuration file (`multigraph.toml`)
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Largest accepted `display.indent`.
const MAX_INDENT: usize = 16;

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Storage pre-allocation hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Number of nodes to reserve room for.
    pub node_capacity: usize,
    /// Number of outgoing edges to reserve per node on first insertion.
    pub edge_capacity: usize,
}

/// Text dump configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Spaces before each edge line.
    pub indent: usize,
    /// Text between destination and weight on an edge line.
    pub separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            separator: " | ".to_string(),
        }
    }
}

/// Main graph configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

impl GraphConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("multigraph.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("MULTIGRAPH_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.indent > MAX_INDENT {
            return Err(ConfigError::InvalidValue {
                key: "display.indent".to_string(),
                message: format!(
                    "value {} is out of range [0, {MAX_INDENT}]",
                    self.display.indent
                ),
            });
        }

        if self.display.separator.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "display.separator".to_string(),
                message: "value must not be empty".to_string(),
            });
        }

        if self.display.separator.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidValue {
                key: "display.separator".to_string(),
                message: "value must not contain line breaks".to_string(),
            });
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
