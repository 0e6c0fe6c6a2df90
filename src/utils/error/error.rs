//! Error handling for the dashboard core
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the dashboard core
pub type Result<T> = std::result::Result<T, BoardError>;

/// Main error type for the dashboard core
///
/// Permission resolution itself never fails; these errors surface only from
/// the boundary layers (configuration parsing and role parsing).
#[derive(Error, Debug)]
pub enum BoardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Unknown role spelling at the parse boundary
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BoardError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::Authorization(message.into())
    }

    pub fn unknown_role<S: Into<String>>(role: S) -> Self {
        Self::UnknownRole(role.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::config("missing default role");
        assert_eq!(err.to_string(), "Configuration error: missing default role");

        let err = BoardError::unknown_role("superuser");
        assert_eq!(err.to_string(), "Unknown role: superuser");
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            BoardError::validation("bad"),
            BoardError::Validation(_)
        ));
        assert!(matches!(
            BoardError::authorization("denied"),
            BoardError::Authorization(_)
        ));
    }
}
