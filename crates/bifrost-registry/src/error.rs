//! Error types for bifrost-registry

use thiserror::Error;

/// Result type alias using bifrost-registry's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Registry error types
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub CLI (gh) not found
    #[error("GitHub CLI (gh) is not installed. Please install gh CLI: https://cli.github.com/")]
    GhNotFound,

    /// GitHub CLI not authenticated
    #[error("GitHub CLI is not authenticated. Please run: gh auth login")]
    GhNotAuthenticated,

    /// GitHub CLI operation failed
    #[error("GitHub CLI operation failed: {message}")]
    GhOperation { message: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Bundled registry asset missing or unreadable
    #[error("Bundled registry is missing or corrupt: {message}")]
    BundledRegistry { message: String },

    /// Invalid temp path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Core library error
    #[error(transparent)]
    Core(#[from] bifrost_core::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a gh operation error
    pub fn gh_operation(message: impl Into<String>) -> Self {
        Self::GhOperation {
            message: message.into(),
        }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a bundled registry error
    pub fn bundled_registry(message: impl Into<String>) -> Self {
        Self::BundledRegistry {
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
