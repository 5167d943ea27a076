//! Registry reconciliation
//!
//! The registry is a flat ordered sequence keyed by `(owner, repo)`.
//! Reconciling a submission is last-write-wins per key with stable ordering:
//! an existing entry is replaced in place, a new one is appended.

use crate::entry::RegistryEntry;

/// Merge an entry into the registry
///
/// Scans for the first element matching the entry's `(owner, repo)` (exact,
/// case-sensitive). A match is replaced in place, preserving its position;
/// otherwise the entry is appended. Total: always returns a valid sequence.
pub fn reconcile(mut registry: Vec<RegistryEntry>, entry: RegistryEntry) -> Vec<RegistryEntry> {
    match registry
        .iter()
        .position(|existing| existing.owner == entry.owner && existing.repo == entry.repo)
    {
        Some(index) => registry[index] = entry,
        None => registry.push(entry),
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(owner: &str, repo: &str, description: &str) -> RegistryEntry {
        RegistryEntry {
            owner: owner.to_string(),
            repo: repo.to_string(),
            description: description.to_string(),
            platform: "remix".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_append_when_no_match() {
        let registry = vec![entry("a", "b", "first"), entry("c", "d", "second")];
        let incoming = entry("e", "f", "third");

        let result = reconcile(registry.clone(), incoming.clone());

        assert_eq!(result.len(), registry.len() + 1);
        assert_eq!(result[0], registry[0]);
        assert_eq!(result[1], registry[1]);
        assert_eq!(result[2], incoming);
    }

    #[test]
    fn test_replace_in_place_preserves_position() {
        let registry = vec![
            entry("a", "b", "first"),
            entry("c", "d", "second"),
            entry("e", "f", "third"),
        ];
        let incoming = entry("c", "d", "updated");

        let result = reconcile(registry.clone(), incoming.clone());

        assert_eq!(result.len(), registry.len());
        assert_eq!(result[0], registry[0]);
        assert_eq!(result[1], incoming);
        assert_eq!(result[2], registry[2]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let registry = vec![entry("Owner", "Repo", "original")];
        let incoming = entry("owner", "repo", "different case");

        let result = reconcile(registry, incoming);

        // Case differs, so this is a new key and appends
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_first_match_wins_on_duplicate_keys() {
        // A registry that already violates the at-most-one invariant still
        // reconciles deterministically against its first match
        let registry = vec![entry("a", "b", "first"), entry("a", "b", "dup")];
        let incoming = entry("a", "b", "updated");

        let result = reconcile(registry, incoming.clone());

        assert_eq!(result[0], incoming);
        assert_eq!(result[1].description, "dup");
    }

    #[test]
    fn test_empty_registry_append() {
        let incoming = entry("a", "b", "only");
        let result = reconcile(Vec::new(), incoming.clone());
        assert_eq!(result, vec![incoming]);
    }
}
