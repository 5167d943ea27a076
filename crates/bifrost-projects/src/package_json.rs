//! Package metadata rewrite

use crate::error::{Error, Result};
use camino::Utf8Path;
use serde_json::{json, Value};
use tracing::debug;

/// Rewrite the cloned template's `package.json` name to the project name
///
/// Templates without a `package.json` get a minimal private one so the
/// package managers have something to work with. All other fields of an
/// existing file are preserved as-is.
pub fn update_package_json(project_dir: &Utf8Path, project_name: &str) -> Result<()> {
    let path = project_dir.join("package.json");

    let mut package: Value = if path.exists() {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::metadata_rewrite(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| Error::metadata_rewrite(e.to_string()))?
    } else {
        debug!("No package.json in template, creating a default one");
        json!({
            "version": "0.0.1",
            "private": true,
        })
    };

    let Some(object) = package.as_object_mut() else {
        return Err(Error::metadata_rewrite("package.json is not a JSON object"));
    };
    object.insert("name".to_string(), Value::String(project_name.to_string()));

    let mut content = serde_json::to_string_pretty(&package)
        .map_err(|e| Error::metadata_rewrite(e.to_string()))?;
    content.push('\n');

    std::fs::write(&path, content).map_err(|e| Error::metadata_rewrite(e.to_string()))?;
    Ok(())
}
