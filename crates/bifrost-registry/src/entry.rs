//! Registry entry type and descriptor projection

use crate::error::Result;
use bifrost_core::{StackReference, TemplateDescriptor};
use serde::{Deserialize, Serialize};

/// One published template in the community registry
///
/// A denormalized projection of a template descriptor's identifying subset:
/// publishing drops `name`, `postInstall`, and `plugins`. The registry is
/// structurally a flat array but is keyed by `(owner, repo)` - at most one
/// entry per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Template description
    #[serde(default)]
    pub description: String,
    /// Platform tag
    #[serde(default)]
    pub platform: String,
    /// Descriptive tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RegistryEntry {
    /// Project a descriptor into its published registry form
    ///
    /// # Errors
    /// Fails when the descriptor's `github` field is not an `owner/repo`
    /// reference.
    pub fn from_descriptor(descriptor: &TemplateDescriptor) -> Result<Self> {
        let reference = StackReference::parse(&descriptor.github)?;

        Ok(Self {
            owner: reference.owner,
            repo: reference.repo,
            description: descriptor.description.clone(),
            platform: descriptor.platform.clone(),
            tags: descriptor.tags.clone(),
        })
    }

    /// The entry's `owner/repo` reference
    pub fn reference(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
