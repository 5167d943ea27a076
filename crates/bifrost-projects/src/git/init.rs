//! Repository initialization for freshly materialized projects

use crate::error::{Error, Result};
use crate::git::clone::check_git_available;
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Initialize a git repository with an initial commit of all project files
///
/// `git init` is safe to re-run on an existing repository. Callers treat any
/// failure here as "skipped": a missing git identity or other local
/// misconfiguration must not abort project creation.
pub async fn init_repository(path: &Utf8Path, commit_message: &str) -> Result<()> {
    check_git_available().await?;

    run_git(path, &["init"]).await?;
    run_git(path, &["add", "."]).await?;
    run_git(path, &["commit", "-m", commit_message]).await?;

    info!("Initialized git repository at {}", path);
    Ok(())
}

pub(super) async fn run_git(path: &Utf8Path, args: &[&str]) -> Result<()> {
    debug!("Running: git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(path)
        .args(args)
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "git {} failed: {}",
            args.first().unwrap_or(&""),
            stderr.trim()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn set_test_identity(path: &Utf8Path) {
        run_git(path, &["config", "user.name", "Bifrost Test"])
            .await
            .unwrap();
        run_git(path, &["config", "user.email", "test@bifrost.dev"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_init_repository_creates_commit() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap();
        std::fs::write(path.join("README.md"), "# test").unwrap();

        // Seed the repository so a throwaway identity can be configured
        // before the initial commit runs
        run_git(path, &["init"]).await.unwrap();
        set_test_identity(path).await;

        init_repository(path, "Initial commit from bifrost")
            .await
            .unwrap();

        assert!(path.join(".git").exists());
        run_git(path, &["rev-parse", "--verify", "HEAD"])
            .await
            .expect("initial commit should exist");
    }

    #[tokio::test]
    async fn test_run_git_surfaces_failures() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap();

        let err = run_git(path, &["not-a-subcommand"]).await.unwrap_err();
        assert!(matches!(err, Error::GitOperation { .. }));
    }
}
