//! Core error types for compose diagram generation
//!
//! All three kinds are fatal for a run. Malformed data *inside* a service
//! definition never produces one of these; it is skipped where it is read.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a compose document or writing diagrams
#[derive(Error, Debug)]
pub enum ComposeVizError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Storage error: failed to write '{}': {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ComposeVizError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Configuration error for a compose file that does not exist
    pub fn file_not_found(path: &Path) -> Self {
        Self::configuration(format!("File not found: {}", path.display()))
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a storage error for the given output path
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Returns true for the missing-input case
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Configuration { message } if message.starts_with("File not found"))
    }
}

impl From<serde_yaml::Error> for ComposeVizError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(format!("invalid YAML: {}", err))
    }
}

/// Result alias for loader and writer operations
pub type Result<T> = std::result::Result<T, ComposeVizError>;
