//! Error types for bifrost-projects

use thiserror::Error;

/// Result type alias using bifrost-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project materialization error types
#[derive(Error, Debug)]
pub enum Error {
    /// Git command not found
    #[error("Git is not installed. Please install Git and try again")]
    GitNotFound,

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Clone failed for a reason other than a missing remote
    #[error("Failed to clone repository: {message}")]
    CloneFailed { message: String },

    /// Remote repository does not exist or is private
    #[error("Repository {reference} not found or inaccessible")]
    RepoNotFound { reference: String },

    /// Target directory exists and is not empty
    #[error("Directory {path} already exists and is not empty")]
    DirectoryNotEmpty { path: String },

    /// Target path exists but is not a directory
    #[error("Invalid target path: {path}")]
    InvalidPath { path: String },

    /// Dependency installation failed
    #[error("Dependency installation failed: {message}")]
    InstallFailed { message: String },

    /// Package metadata rewrite failed
    #[error("Failed to update package.json: {message}")]
    MetadataRewrite { message: String },

    /// Plugin installation failed
    #[error("Failed to install plugin {plugin}: {reason}")]
    PluginInstall { plugin: String, reason: String },

    /// No origin remote configured for push
    #[error("No remote origin found. Ensure you have a remote repository set up")]
    NoRemoteOrigin,

    /// Push failed
    #[error("Failed to push to GitHub. Ensure you have a remote repository set up and proper permissions")]
    PushFailed,

    /// Core library error
    #[error(transparent)]
    Core(#[from] bifrost_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    /// Create a repo not found error
    pub fn repo_not_found(reference: impl Into<String>) -> Self {
        Self::RepoNotFound {
            reference: reference.into(),
        }
    }

    /// Create a directory not empty error
    pub fn directory_not_empty(path: impl Into<String>) -> Self {
        Self::DirectoryNotEmpty { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create an install failed error
    pub fn install_failed(message: impl Into<String>) -> Self {
        Self::InstallFailed {
            message: message.into(),
        }
    }

    /// Create a metadata rewrite error
    pub fn metadata_rewrite(message: impl Into<String>) -> Self {
        Self::MetadataRewrite {
            message: message.into(),
        }
    }

    /// Create a plugin install error
    pub fn plugin_install(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PluginInstall {
            plugin: plugin.into(),
            reason: reason.into(),
        }
    }
}
