//! Configuration management

mod models;

pub use models::{AccessConfig, LoggingConfig, warn_permissive_config};

use crate::utils::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Access control configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate configuration from YAML text
    ///
    /// The embedding application supplies the text; the core performs no
    /// file or network I/O of its own.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from JSON text
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge another configuration over this one
    pub fn merge(self, other: Self) -> Self {
        Self {
            access: self.access.merge(other.access),
            logging: self.logging.merge(other.logging),
        }
    }

    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        self.access.validate().map_err(BoardError::validation)?;
        self.logging.validate().map_err(BoardError::validation)?;
        Ok(())
    }
}
