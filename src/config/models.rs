//! Configuration model types

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::models::{Role, RoleGroup};
use crate::utils::logging::LogLevel;

/// Access control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Enable access control
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Default role for new sign-ins
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Role groups treated as administrators
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_role: default_role(),
            admin_roles: default_admin_roles(),
        }
    }
}

impl AccessConfig {
    /// Merge access configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.admin_roles != default_admin_roles() {
            self.admin_roles = other.admin_roles;
        }
        self
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), String> {
        self.default_role
            .parse::<Role>()
            .map_err(|_| format!("Unknown default role: {}", self.default_role))?;

        for role in &self.admin_roles {
            role.parse::<RoleGroup>()
                .map_err(|_| format!("Unknown admin role group: {}", role))?;
        }

        if self.admin_roles.is_empty() {
            return Err("At least one admin role group is required".to_string());
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log verbosity level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Merge logging configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.level != default_log_level() {
            self.level = other.level;
        }
        self
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), String> {
        self.level
            .parse::<LogLevel>()
            .map(|_| ())
            .map_err(|_| format!("Invalid log level: {}", self.level))
    }
}

/// Warn about permissive configuration
pub fn warn_permissive_config(config: &AccessConfig) {
    if !config.enabled {
        warn!(
            "Access control is disabled! Every permission check will grant. Enable it before deploying outside local development."
        );
    }
}

fn default_true() -> bool {
    true
}

fn default_role() -> String {
    "logistics_staff".to_string()
}

fn default_admin_roles() -> Vec<String> {
    vec!["admin".to_string(), "ceo".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}
