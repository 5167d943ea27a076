//! Template repository cloning

use crate::error::{Error, Result};
use bifrost_core::StackReference;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

/// Check if git is available in PATH
pub async fn check_git_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|_| Error::GitNotFound)?;

    if !output.status.success() {
        return Err(Error::GitNotFound);
    }

    Ok(())
}

/// Clone a template repository's contents into a target directory
///
/// The clone is shallow (depth 1, HTTPS) into a scoped temporary directory;
/// the `.git` metadata directory is stripped before the contents are moved
/// into place so the new project starts with a clean history. The temporary
/// directory is removed on success and failure alike.
///
/// # Errors
/// A clone failure whose stderr indicates the remote does not exist is
/// raised as `Error::RepoNotFound`; other failures as `Error::CloneFailed`.
pub async fn clone_template(reference: &StackReference, target: &Utf8Path) -> Result<()> {
    check_git_available().await?;

    let temp = scoped_temp_dir()?;
    let clone_dir = utf8_temp_path(&temp)?.join("template");

    run_clone(reference, &clone_dir).await?;

    // Strip version-control metadata so the project starts fresh
    let git_dir = clone_dir.join(".git");
    if git_dir.exists() {
        std::fs::remove_dir_all(&git_dir)?;
    }

    std::fs::create_dir_all(target)?;
    copy_dir_contents(&clone_dir, target)?;

    close_temp_dir(temp);
    info!("Cloned {} into {}", reference, target);

    Ok(())
}

/// Clone a repository into a fresh temporary directory and hand ownership of
/// that directory to the caller
///
/// Used for transient clones (plugin manifests, registry forks) that are
/// read and then discarded; dropping the returned `TempDir` cleans up.
pub async fn clone_to_temp(reference: &StackReference) -> Result<(TempDir, Utf8PathBuf)> {
    check_git_available().await?;

    let temp = scoped_temp_dir()?;
    let clone_dir = utf8_temp_path(&temp)?.join(&reference.repo);

    run_clone(reference, &clone_dir).await?;

    Ok((temp, clone_dir))
}

async fn run_clone(reference: &StackReference, destination: &Utf8Path) -> Result<()> {
    let url = reference.clone_url();
    debug!("Running: git clone --depth 1 {} {}", url, destination);

    let output = Command::new("git")
        .args(["clone", "--depth", "1", url.as_str(), destination.as_str()])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("not found") || stderr.contains("not exist") {
            return Err(Error::repo_not_found(reference.to_string()));
        }
        return Err(Error::clone_failed(stderr.trim().to_string()));
    }

    Ok(())
}

fn scoped_temp_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix("bifrost-").tempdir()?)
}

fn utf8_temp_path(temp: &TempDir) -> Result<Utf8PathBuf> {
    Utf8Path::from_path(temp.path())
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| Error::invalid_path(temp.path().display().to_string()))
}

/// Explicitly close a temp dir, downgrading cleanup failures to debug logs
fn close_temp_dir(temp: TempDir) {
    if let Err(e) = temp.close() {
        debug!("Failed to remove temporary clone directory: {}", e);
    }
}

/// Copy every entry of `src` into `dst` (which must already exist)
fn copy_dir_contents(src: &Utf8Path, dst: &Utf8Path) -> Result<()> {
    for entry in src.read_dir_utf8()? {
        let entry = entry?;
        let dest = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            std::fs::create_dir_all(&dest)?;
            copy_dir_contents(entry.path(), &dest)?;
        } else {
            std::fs::copy(entry.path(), &dest)?;
        }
    }

    Ok(())
}
