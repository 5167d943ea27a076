//! Pushing a materialized project to its remote

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, warn};

/// Push the project's initial commit to its origin remote
///
/// Pushes `main` first and falls back to `master` when no local `main`
/// branch exists. Callers surface failure as a warning; a failed push never
/// undoes prior materialization steps.
pub async fn push_to_origin(path: &Utf8Path) -> Result<()> {
    let origin = remote_url(path, "origin").await?;
    if origin.is_none() {
        return Err(Error::NoRemoteOrigin);
    }

    let branch = if branch_exists(path, "main").await {
        "main"
    } else if branch_exists(path, "master").await {
        "master"
    } else {
        "main"
    };

    debug!("Pushing branch {} to origin", branch);
    let output = Command::new("git")
        .current_dir(path)
        .args(["push", "-u", "origin", branch])
        .output()
        .await?;

    if !output.status.success() {
        warn!(
            "git push failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(Error::PushFailed);
    }

    Ok(())
}

/// Get the URL of a remote, or `None` when the remote is not configured
pub async fn remote_url(path: &Utf8Path, name: &str) -> Result<Option<String>> {
    let output = Command::new("git")
        .current_dir(path)
        .args(["remote", "get-url", name])
        .output()
        .await?;

    if !output.status.success() {
        return Ok(None);
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok((!url.is_empty()).then_some(url))
}

async fn branch_exists(path: &Utf8Path, branch: &str) -> bool {
    Command::new("git")
        .current_dir(path)
        .args(["rev-parse", "--verify", branch])
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}
