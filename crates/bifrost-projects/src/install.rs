//! Dependency installation and post-install script execution

use crate::error::{Error, Result};
use bifrost_core::PackageManager;
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, warn};

/// Install the project's dependencies with the chosen package manager
///
/// A failed install is fatal for materialization.
pub async fn install_dependencies(project_dir: &Utf8Path, pm: PackageManager) -> Result<()> {
    let (cmd, args) = pm.install_command();
    debug!("Running: {} {}", cmd, args.join(" "));

    let output = Command::new(cmd)
        .current_dir(project_dir)
        .args(&args)
        .output()
        .await
        .map_err(|e| Error::install_failed(format!("failed to run {cmd}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::install_failed(stderr.trim().to_string()));
    }

    Ok(())
}

/// Run the descriptor's post-install scripts in order
///
/// Script failures are soft: each failing script is logged and the remaining
/// scripts still run. Returns the names of the scripts that failed.
pub async fn run_post_install_scripts(
    project_dir: &Utf8Path,
    pm: PackageManager,
    scripts: &[String],
) -> Result<Vec<String>> {
    let mut failed = Vec::new();

    for script in scripts {
        let (cmd, args) = pm.run_command(script);
        debug!("Running post-install script: {} {}", cmd, args.join(" "));

        let outcome = Command::new(cmd)
            .current_dir(project_dir)
            .args(&args)
            .output()
            .await;

        match outcome {
            Ok(output) if output.status.success() => {}
            Ok(output) => {
                warn!(
                    "Post-install script \"{}\" failed: {}",
                    script,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                failed.push(script.clone());
            }
            Err(e) => {
                warn!("Post-install script \"{}\" failed to start: {}", script, e);
                failed.push(script.clone());
            }
        }
    }

    Ok(failed)
}

/// Add packages to the project with the chosen package manager
pub async fn add_packages(
    project_dir: &Utf8Path,
    pm: PackageManager,
    packages: &[String],
    dev: bool,
) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }

    let (cmd, base_args) = pm.add_command(dev);
    debug!("Running: {} {} {}", cmd, base_args.join(" "), packages.join(" "));

    let output = Command::new(cmd)
        .current_dir(project_dir)
        .args(&base_args)
        .args(packages)
        .output()
        .await
        .map_err(|e| Error::install_failed(format!("failed to run {cmd}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::install_failed(stderr.trim().to_string()));
    }

    Ok(())
}
