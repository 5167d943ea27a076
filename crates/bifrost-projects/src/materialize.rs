//! Project materialization context and target validation
//!
//! The CLI's `new` command drives the stages in a fixed order:
//! validate, clone, rewrite metadata, then the optional install block
//! (dependencies, features, post-install scripts, plugins), git init,
//! descriptor write, and the optional push. This module owns the shared
//! context and the up-front target validation; the steps themselves live in
//! their own modules.

use crate::error::{Error, Result};
use crate::features::FeatureFlags;
use bifrost_core::{PackageManager, StackReference};
use camino::{Utf8Path, Utf8PathBuf};

/// Everything the materialization run needs, resolved before any stage runs
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Sanitized package name; also the target directory name
    pub project_name: String,
    /// Template the project is cloned from
    pub template: StackReference,
    /// Package manager for installs and script runs
    pub package_manager: PackageManager,
    /// Whether to install dependencies (and run the dependent stages)
    pub install: bool,
    /// Whether to push the initial commit to origin
    pub git_push: bool,
    /// Optional feature installs
    pub features: FeatureFlags,
}

impl ProjectContext {
    /// Absolute target directory for the new project
    pub fn target_dir(&self) -> Utf8PathBuf {
        let path = Utf8PathBuf::from(&self.project_name);
        if path.is_absolute() {
            return path;
        }

        match std::env::current_dir() {
            Ok(cwd) => match Utf8PathBuf::from_path_buf(cwd) {
                Ok(cwd) => cwd.join(&self.project_name),
                Err(_) => path,
            },
            Err(_) => path,
        }
    }
}

/// Validate the target directory before any clone attempt
///
/// The target must either not exist yet or be an empty directory; anything
/// else aborts materialization before a single network call.
pub fn validate_target_dir(path: &Utf8Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    if !path.is_dir() {
        return Err(Error::invalid_path(path.as_str()));
    }

    let mut entries = path.read_dir_utf8()?;
    if entries.next().is_some() {
        return Err(Error::directory_not_empty(path.as_str()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nonexistent_target_is_valid() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap().join("new-app");
        assert!(validate_target_dir(&path).is_ok());
    }

    #[test]
    fn test_empty_directory_is_valid() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap();
        assert!(validate_target_dir(path).is_ok());
    }

    #[test]
    fn test_non_empty_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap();
        std::fs::write(path.join("leftover.txt"), "x").unwrap();

        let err = validate_target_dir(path).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotEmpty { .. }));
    }

    #[test]
    fn test_file_target_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap().join("occupied");
        std::fs::write(&path, "x").unwrap();

        let err = validate_target_dir(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }
}
