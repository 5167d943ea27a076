//! Plugin installation
//!
//! Plugins are templates layered on top of a project: an `owner/repo`
//! reference whose repository carries a `plugin.bifrost` manifest at its
//! root and payload files under `files/`. Plugins install sequentially; one
//! plugin's failure is logged and the remaining plugins still install.

use crate::error::{Error, Result};
use crate::git::clone_to_temp;
use crate::install::add_packages;
use bifrost_core::manifest::read_plugin_manifest;
use bifrost_core::{PackageManager, PluginFile, PluginManifest, StackReference};
use camino::Utf8Path;
use tracing::{debug, info, warn};

/// Resolves the destination path for a plugin file
///
/// The manifest carries a suggested location; the CLI confirms or overrides
/// it interactively, so the decision is injected here as a callback.
pub type LocationResolver<'a> = &'a mut dyn FnMut(&PluginFile) -> Result<String>;

/// Accept every suggested location unchanged (non-interactive installs)
pub fn suggested_location(file: &PluginFile) -> Result<String> {
    Ok(file.location.clone())
}

/// Fetch a plugin's manifest from its repository
///
/// Clones into a scoped temporary directory, reads `plugin.bifrost`, and
/// discards the clone. A repository without the manifest is a fatal fetch
/// error for that plugin, not a silent skip.
pub async fn fetch_plugin_manifest(reference: &StackReference) -> Result<PluginManifest> {
    let (temp, clone_dir) = clone_to_temp(reference).await?;

    let manifest = read_plugin_manifest(&clone_dir, &reference.to_string());

    if let Err(e) = temp.close() {
        debug!("Failed to remove temporary plugin clone: {}", e);
    }

    Ok(manifest?)
}

/// Copy a plugin's payload files into the project
///
/// Source paths resolve against the plugin clone's `files/` directory. A
/// listed file missing from the plugin is a warning, not an error.
pub fn copy_plugin_files(
    project_dir: &Utf8Path,
    plugin_dir: &Utf8Path,
    files: &[PluginFile],
    resolver: LocationResolver<'_>,
) -> Result<()> {
    for file in files {
        let location = resolver(file)?;
        let source = plugin_dir.join("files").join(&file.name);
        let destination = project_dir.join(&location);

        if !source.exists() {
            warn!("File {} not found in plugin, skipping", file.name);
            continue;
        }

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(&source, &destination)?;
        info!("Copied {} to {}", file.name, location);
    }

    Ok(())
}

/// Install a single plugin into the project
pub async fn install_plugin(
    project_dir: &Utf8Path,
    pm: PackageManager,
    reference: &str,
    resolver: LocationResolver<'_>,
) -> Result<PluginManifest> {
    let parsed = StackReference::parse(reference)?;

    info!("Installing plugin: {}", parsed);
    let manifest = fetch_plugin_manifest(&parsed).await?;

    if !manifest.libraries.is_empty() {
        add_packages(project_dir, pm, &manifest.libraries, false)
            .await
            .map_err(|e| Error::plugin_install(reference, e.to_string()))?;
    }

    if !manifest.files.is_empty() {
        let (temp, clone_dir) = clone_to_temp(&parsed).await?;
        let copied = copy_plugin_files(project_dir, &clone_dir, &manifest.files, resolver);

        if let Err(e) = temp.close() {
            debug!("Failed to remove temporary plugin clone: {}", e);
        }
        copied?;
    }

    info!("Plugin {} installed", manifest.name);
    Ok(manifest)
}

/// Install every plugin named by the descriptor, sequentially
///
/// One plugin's failure is recorded and the next plugin still installs.
/// Returns `(reference, error)` pairs for the plugins that failed.
pub async fn install_plugins(
    project_dir: &Utf8Path,
    pm: PackageManager,
    plugins: &[String],
    resolver: LocationResolver<'_>,
) -> Vec<(String, Error)> {
    let mut failures = Vec::new();

    for reference in plugins {
        match install_plugin(project_dir, pm, reference, &mut *resolver).await {
            Ok(_) => {}
            Err(e) => {
                warn!("Failed to install plugin {}: {}", reference, e);
                failures.push((reference.clone(), e));
            }
        }
    }

    failures
}
