//! Template descriptor storage (`config.bifrost`)
//!
//! Every generated project carries a `config.bifrost` JSON file at its root
//! describing the template it came from. The file is created at most once per
//! project directory: repeated generation runs never clobber a hand-edited
//! descriptor.

use crate::error::Result;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Descriptor file name at a project root
pub const DESCRIPTOR_FILE: &str = "config.bifrost";

/// Template descriptor persisted per generated project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    /// Project/template display name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Platform tag (e.g. "remix"); "unknown" when undetectable
    #[serde(default)]
    pub platform: String,

    /// `owner/repo` the project was cloned from
    #[serde(default)]
    pub github: String,

    /// Descriptive tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Package-manager script names to run after install
    #[serde(default)]
    pub post_install: Vec<String>,

    /// `owner/repo` references of plugins layered on top
    #[serde(default)]
    pub plugins: Vec<String>,
}

impl TemplateDescriptor {
    /// Serialize as the on-disk JSON form (2-space indent, trailing newline)
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Inputs for creating a descriptor, resolved field by field
///
/// Precedence per field: explicit argument > value from `existing` (a
/// descriptor shipped inside the cloned template) > hard default.
#[derive(Debug, Clone, Default)]
pub struct DescriptorSeed {
    /// Project name (always explicit)
    pub name: String,
    /// Template reference the project was cloned from
    pub github: String,
    /// Detected platform, if any
    pub platform: Option<String>,
    /// Detected tags, if any
    pub tags: Option<Vec<String>>,
    /// Descriptor previously loaded from the cloned template, if any
    pub existing: Option<TemplateDescriptor>,
}

impl DescriptorSeed {
    /// Resolve the seed into a concrete descriptor
    pub fn resolve(self) -> TemplateDescriptor {
        let existing = self.existing.unwrap_or_default();

        TemplateDescriptor {
            name: self.name,
            github: self.github,
            description: layered(None, non_empty(existing.description), String::new),
            platform: layered(self.platform, non_empty(existing.platform), || {
                "unknown".to_string()
            }),
            tags: layered(self.tags, non_empty_vec(existing.tags), Vec::new),
            post_install: layered(None, non_empty_vec(existing.post_install), Vec::new),
            plugins: layered(None, non_empty_vec(existing.plugins), Vec::new),
        }
    }
}

/// Layered-defaults resolver: explicit > inherited > hard default
fn layered<T>(explicit: Option<T>, inherited: Option<T>, default: impl FnOnce() -> T) -> T {
    explicit.or(inherited).unwrap_or_else(default)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn non_empty_vec(value: Vec<String>) -> Option<Vec<String>> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Read the descriptor from a project directory
///
/// An absent file is the normal first-run state and returns `Ok(None)`.
pub fn read_descriptor(project_dir: &Utf8Path) -> Result<Option<TemplateDescriptor>> {
    let path = project_dir.join(DESCRIPTOR_FILE);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let descriptor = serde_json::from_str(&content)?;
    Ok(Some(descriptor))
}

/// Write a descriptor unless the project already has one
///
/// Returns `true` when a file was written, `false` when an existing
/// descriptor was left untouched.
pub fn write_descriptor_if_absent(project_dir: &Utf8Path, seed: DescriptorSeed) -> Result<bool> {
    let path = project_dir.join(DESCRIPTOR_FILE);

    if path.exists() {
        debug!("Descriptor already exists at {}, leaving untouched", path);
        return Ok(false);
    }

    let descriptor = seed.resolve();
    std::fs::write(&path, descriptor.to_json()?)?;
    debug!("Wrote descriptor to {}", path);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_dir(temp: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp.path()).unwrap()
    }

    #[test]
    fn test_read_descriptor_absent_is_none() {
        let temp = TempDir::new().unwrap();
        let result = read_descriptor(project_dir(&temp)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);

        let seed = DescriptorSeed {
            name: "my-app".to_string(),
            github: "remix-run/indie-stack".to_string(),
            platform: Some("remix".to_string()),
            tags: Some(vec!["typescript".to_string()]),
            existing: None,
        };

        assert!(write_descriptor_if_absent(dir, seed).unwrap());

        let descriptor = read_descriptor(dir).unwrap().unwrap();
        assert_eq!(descriptor.name, "my-app");
        assert_eq!(descriptor.github, "remix-run/indie-stack");
        assert_eq!(descriptor.platform, "remix");
        assert_eq!(descriptor.tags, vec!["typescript"]);
        assert!(descriptor.post_install.is_empty());
        assert!(descriptor.plugins.is_empty());
    }

    #[test]
    fn test_write_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);

        let first = DescriptorSeed {
            name: "first".to_string(),
            github: "a/b".to_string(),
            ..Default::default()
        };
        assert!(write_descriptor_if_absent(dir, first).unwrap());
        let after_first = std::fs::read_to_string(dir.join(DESCRIPTOR_FILE)).unwrap();

        // Second call with different arguments must be a no-op
        let second = DescriptorSeed {
            name: "second".to_string(),
            github: "c/d".to_string(),
            platform: Some("vue".to_string()),
            ..Default::default()
        };
        assert!(!write_descriptor_if_absent(dir, second).unwrap());

        let after_second = std::fs::read_to_string(dir.join(DESCRIPTOR_FILE)).unwrap();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_seed_precedence_explicit_over_existing() {
        let existing = TemplateDescriptor {
            name: "template".to_string(),
            description: "shipped description".to_string(),
            platform: "remix".to_string(),
            github: "upstream/repo".to_string(),
            tags: vec!["old".to_string()],
            post_install: vec!["setup".to_string()],
            plugins: vec!["a/b".to_string()],
        };

        let resolved = DescriptorSeed {
            name: "my-app".to_string(),
            github: "me/mine".to_string(),
            platform: Some("vue".to_string()),
            tags: Some(vec!["fresh".to_string()]),
            existing: Some(existing),
        }
        .resolve();

        // Explicit arguments win
        assert_eq!(resolved.name, "my-app");
        assert_eq!(resolved.github, "me/mine");
        assert_eq!(resolved.platform, "vue");
        assert_eq!(resolved.tags, vec!["fresh"]);
        // Fields with no explicit argument inherit from the existing descriptor
        assert_eq!(resolved.description, "shipped description");
        assert_eq!(resolved.post_install, vec!["setup"]);
        assert_eq!(resolved.plugins, vec!["a/b"]);
    }

    #[test]
    fn test_seed_hard_defaults() {
        let resolved = DescriptorSeed {
            name: "bare".to_string(),
            github: "x/y".to_string(),
            ..Default::default()
        }
        .resolve();

        assert_eq!(resolved.platform, "unknown");
        assert_eq!(resolved.description, "");
        assert!(resolved.tags.is_empty());
        assert!(resolved.post_install.is_empty());
        assert!(resolved.plugins.is_empty());
    }

    #[test]
    fn test_on_disk_field_names_are_camel_case() {
        let descriptor = TemplateDescriptor {
            name: "n".to_string(),
            post_install: vec!["db:setup".to_string()],
            ..Default::default()
        };

        let json = descriptor.to_json().unwrap();
        assert!(json.contains("\"postInstall\""));
        assert!(!json.contains("post_install"));
    }
}
