//! Registry submission workflow
//!
//! Publishes a template entry through the registry's change-review flow:
//! fork the registry repository, clone the fork into a scoped temporary
//! directory, write the reconciled registry file, commit, push, and open a
//! pull request. Every subprocess runs with an explicit working directory.
//!
//! Two submitters racing on the same entry are not guarded against here;
//! the pull-request review is the conflict resolution.

use crate::entry::RegistryEntry;
use crate::error::{Error, Result};
use crate::reconcile::reconcile;
use crate::remote::fetch_registry;
use crate::{REGISTRY_FILE, REGISTRY_REPO};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

/// Check if the GitHub CLI is available
pub async fn check_gh_available() -> Result<()> {
    let result = Command::new("gh").arg("--version").output().await;

    match result {
        Ok(output) if output.status.success() => Ok(()),
        _ => Err(Error::GhNotFound),
    }
}

/// Check if the GitHub CLI is authenticated
pub async fn check_gh_authenticated() -> Result<()> {
    let output = run_gh_raw(None, &["auth", "status"]).await?;

    if !output.status.success() {
        return Err(Error::GhNotAuthenticated);
    }

    Ok(())
}

/// Submit an entry to the shared registry; returns the pull-request URL
///
/// `template_name` and the entry's metadata only shape the commit and PR
/// text. The registry state merged against is whatever the remote holds at
/// fetch time (empty when unreachable).
pub async fn submit_entry(entry: RegistryEntry, template_name: &str) -> Result<String> {
    check_gh_available().await?;
    check_gh_authenticated().await?;

    info!("Forking registry repository {}", REGISTRY_REPO);
    run_gh(None, &["repo", "fork", REGISTRY_REPO, "--clone=false"]).await?;

    let username = run_gh(None, &["api", "user", "-q", ".login"]).await?;
    let registry_name = REGISTRY_REPO
        .split('/')
        .next_back()
        .unwrap_or(REGISTRY_REPO);
    let fork = format!("{username}/{registry_name}");

    let temp = tempfile::Builder::new().prefix("bifrost-registry-").tempdir()?;
    let clone_dir = utf8_path(&temp)?.join(registry_name);

    info!("Cloning fork {}", fork);
    run_gh(None, &["repo", "clone", &fork, clone_dir.as_str()]).await?;

    let current = fetch_registry().await;
    let updated = reconcile(current, entry.clone());
    write_registry_file(&clone_dir, &updated)?;

    run_git(&clone_dir, &["add", "."]).await?;
    run_git(
        &clone_dir,
        &[
            "commit",
            "-m",
            &format!("Add/Update template: {template_name}"),
        ],
    )
    .await?;
    run_git(&clone_dir, &["push"]).await?;

    info!("Creating pull request against {}", REGISTRY_REPO);
    let pr_url = run_gh(
        Some(&clone_dir),
        &[
            "pr",
            "create",
            "--repo",
            REGISTRY_REPO,
            "--title",
            &format!("Add template: {template_name}"),
            "--body",
            &format!(
                "Submitting template {template_name} to the registry.\n\nPlatform: {}\nDescription: {}",
                entry.platform, entry.description
            ),
        ],
    )
    .await?;

    if let Err(e) = temp.close() {
        debug!("Failed to remove temporary registry clone: {}", e);
    }

    Ok(pr_url)
}

/// Write the full updated registry sequence into the fork's working tree
fn write_registry_file(clone_dir: &Utf8Path, entries: &[RegistryEntry]) -> Result<()> {
    let path = clone_dir.join(REGISTRY_FILE);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    std::fs::write(&path, json)?;

    Ok(())
}

fn utf8_path(temp: &TempDir) -> Result<Utf8PathBuf> {
    Utf8Path::from_path(temp.path())
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| Error::invalid_path(temp.path().display().to_string()))
}

async fn run_gh_raw(dir: Option<&Utf8Path>, args: &[&str]) -> Result<std::process::Output> {
    debug!("Running: gh {}", args.join(" "));

    let mut cmd = Command::new("gh");
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    cmd.args(args).output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::GhNotFound
        } else {
            Error::Io(e)
        }
    })
}

/// Run a gh command, returning trimmed stdout
async fn run_gh(dir: Option<&Utf8Path>, args: &[&str]) -> Result<String> {
    let output = run_gh_raw(dir, args).await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::gh_operation(format!(
            "gh {} failed: {}",
            args.first().unwrap_or(&""),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

async fn run_git(dir: &Utf8Path, args: &[&str]) -> Result<()> {
    debug!("Running: git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(dir)
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

    #[test]
    fn test_write_registry_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let clone_dir = Utf8Path::from_path(temp.path()).unwrap();

        let entries = vec![RegistryEntry {
            owner: "a".to_string(),
            repo: "b".to_string(),
            description: "d".to_string(),
            platform: "remix".to_string(),
            tags: vec![],
        }];

        write_registry_file(clone_dir, &entries).unwrap();

        let written = std::fs::read_to_string(clone_dir.join(REGISTRY_FILE)).unwrap();
        let parsed: Vec<RegistryEntry> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, entries);
    }
}
