//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitPromptError`] for the parts of gitprompt that can
//! fail: reading repository state and loading configuration. Rendering a
//! prompt itself never fails.
//!
//! # Public API
//! - [`GitPromptError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitPromptError>`
//!
//! # Error Categories
//! - **Git operations**: git2 library errors
//! - **File operations**: I/O errors
//! - **Configuration**: Missing config directory, unreadable or malformed config

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gitprompt
#[derive(Error, Debug)]
pub enum GitPromptError {
    // Git repository errors
    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitPromptError
pub type Result<T> = std::result::Result<T, GitPromptError>;

impl GitPromptError {
    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
