//! Plugin manifest reading (`plugin.bifrost`)

use crate::error::{Error, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Manifest file name at a plugin repository root
pub const MANIFEST_FILE: &str = "plugin.bifrost";

/// A file shipped by a plugin, copied from the plugin repository's `files/`
/// directory into the target project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginFile {
    /// Relative source path inside the plugin's `files/` directory
    pub name: String,
    /// Suggested destination path in the target project
    pub location: String,
}

/// Plugin manifest fetched from a plugin repository's root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    /// Plugin display name
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub platform: String,

    /// `owner/repo` of the plugin repository
    #[serde(default)]
    pub github: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Package names to install into the target project
    #[serde(default)]
    pub libraries: Vec<String>,

    /// Files to copy into the target project
    #[serde(default)]
    pub files: Vec<PluginFile>,
}

/// Read the manifest at a plugin repository root
///
/// # Errors
/// Returns `Error::MissingManifest` when `plugin.bifrost` does not exist.
/// The manifest is required: its absence is fatal for that plugin's
/// installation, not a silent skip.
pub fn read_plugin_manifest(plugin_root: &Utf8Path, plugin: &str) -> Result<PluginManifest> {
    let path = plugin_root.join(MANIFEST_FILE);

    if !path.exists() {
        return Err(Error::missing_manifest(plugin));
    }

    let content = std::fs::read_to_string(&path)?;
    let manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}
