//! Bundled default-templates list
//!
//! The CLI ships a snapshot of `registry.bifrost` so `bifrost templates`
//! and the interactive template picker work offline.

use crate::entry::RegistryEntry;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Load the bundled registry snapshot
pub fn bundled_registry() -> Result<Vec<RegistryEntry>> {
    let file = Assets::get("registry.bifrost")
        .ok_or_else(|| Error::bundled_registry("registry.bifrost not embedded"))?;

    let entries = serde_json::from_slice(&file.data)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_registry_parses() {
        let entries = bundled_registry().unwrap();
        assert!(!entries.is_empty());

        // Every bundled entry satisfies the owner/repo key invariant
        for entry in &entries {
            assert!(!entry.owner.is_empty());
            assert!(!entry.repo.is_empty());
        }
    }

    #[test]
    fn test_bundled_registry_has_unique_keys() {
        let entries = bundled_registry().unwrap();
        let mut keys: Vec<_> = entries
            .iter()
            .map(|e| (e.owner.clone(), e.repo.clone()))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), entries.len());
    }
}
