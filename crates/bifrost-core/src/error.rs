//! Error types for bifrost-core

use thiserror::Error;

/// Result type alias using bifrost-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Bifrost
#[derive(Error, Debug)]
pub enum Error {
    /// Template reference did not parse as owner/repo
    #[error("Template must be in format: owner/repo (got: {reference})")]
    MalformedReference { reference: String },

    /// Plugin repository has no plugin.bifrost at its root
    #[error("Plugin {plugin} is missing plugin.bifrost configuration file")]
    MissingManifest { plugin: String },

    /// Unknown package manager
    #[error("Invalid package manager: {name}. Must be one of: npm, pnpm, yarn, bun")]
    InvalidPackageManager { name: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed reference error
    pub fn malformed_reference(reference: impl Into<String>) -> Self {
        Self::MalformedReference {
            reference: reference.into(),
        }
    }

    /// Create a missing manifest error
    pub fn missing_manifest(plugin: impl Into<String>) -> Self {
        Self::MissingManifest {
            plugin: plugin.into(),
        }
    }

    /// Create an invalid package manager error
    pub fn invalid_package_manager(name: impl Into<String>) -> Self {
        Self::InvalidPackageManager { name: name.into() }
    }
}
