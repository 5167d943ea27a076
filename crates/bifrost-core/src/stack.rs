//! Template reference parsing and platform detection

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A parsed `owner/repo` template reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackReference {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl StackReference {
    /// Create a reference from already-validated parts
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse an `owner/repo` string
    ///
    /// # Errors
    /// Returns `Error::MalformedReference` unless the input contains exactly
    /// one `/` with non-empty segments on both sides.
    pub fn parse(reference: &str) -> Result<Self> {
        let mut parts = reference.split('/');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self::new(owner, repo))
            }
            _ => Err(Error::malformed_reference(reference)),
        }
    }

    /// HTTPS clone URL for the referenced repository
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.repo)
    }
}

impl FromStr for StackReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for StackReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Known platform substrings checked in order; first match wins
const PLATFORM_HINTS: &[(&str, &str)] = &[
    ("remix", "remix"),
    ("next", "nextjs"),
    ("vite", "vite"),
    ("vue", "vue"),
    ("svelte", "svelte"),
    ("astro", "astro"),
    ("solid", "solid"),
    ("qwik", "qwik"),
    ("react", "react"),
    ("cra", "react"),
];

/// Tag substrings mapped to canonical tags
const TAG_HINTS: &[(&str, &str)] = &[
    ("typescript", "typescript"),
    ("-ts", "typescript"),
    ("javascript", "javascript"),
    ("-js", "javascript"),
    ("tailwind", "tailwind"),
    ("prisma", "prisma"),
    ("postgres", "postgresql"),
    ("sqlite", "sqlite"),
    ("mongo", "mongodb"),
    ("aws", "aws"),
    ("cloudflare", "cloudflare"),
    ("vercel", "vercel"),
    ("react", "react"),
];

/// Guess a platform tag from substrings of a template reference
pub fn detect_platform(reference: &str) -> Option<&'static str> {
    let lower = reference.to_lowercase();
    PLATFORM_HINTS
        .iter()
        .find(|(hint, _)| lower.contains(hint))
        .map(|(_, platform)| *platform)
}

/// Derive tags from substrings of a template reference
pub fn detect_tags(reference: &str) -> Vec<String> {
    let lower = reference.to_lowercase();
    let mut tags = Vec::new();

    for (hint, tag) in TAG_HINTS {
        if lower.contains(hint) && !tags.iter().any(|t| t == tag) {
            tags.push((*tag).to_string());
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_reference() {
        let parsed = StackReference::parse("remix-run/indie-stack").unwrap();
        assert_eq!(parsed.owner, "remix-run");
        assert_eq!(parsed.repo, "indie-stack");
    }

    #[test]
    fn test_parse_round_trips() {
        for input in ["a/b", "owner/repo", "A5GARD/BIFROST", "x-y/z_w.v"] {
            let parsed = StackReference::parse(input).unwrap();
            assert_eq!(
                format!("{}/{}", parsed.owner, parsed.repo),
                input,
                "round-trip failed for {input}"
            );
            assert_eq!(parsed.to_string(), input);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "norepo", "/repo", "owner/", "/", "a/b/c", "a//b", "owner/repo/extra"] {
            assert!(
                StackReference::parse(input).is_err(),
                "expected failure for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_via_from_str() {
        let parsed: StackReference = "vuejs/create-vue".parse().unwrap();
        assert_eq!(parsed.repo, "create-vue");
    }

    #[test]
    fn test_clone_url() {
        let reference = StackReference::new("remix-run", "indie-stack");
        assert_eq!(
            reference.clone_url(),
            "https://github.com/remix-run/indie-stack.git"
        );
    }

    #[test]
    fn test_detect_platform() {
        assert_eq!(detect_platform("remix-run/indie-stack"), Some("remix"));
        assert_eq!(detect_platform("vercel/next-starter"), Some("nextjs"));
        assert_eq!(detect_platform("someone/react-app"), Some("react"));
        assert_eq!(detect_platform("someone/mystery-template"), None);
    }

    #[test]
    fn test_detect_tags() {
        let tags = detect_tags("remix-run/indie-stack-typescript-prisma");
        assert!(tags.contains(&"typescript".to_string()));
        assert!(tags.contains(&"prisma".to_string()));

        // "-ts" and "typescript" both map to the same tag, without duplicates
        let tags = detect_tags("someone/typescript-app-ts");
        assert_eq!(tags.iter().filter(|t| *t == "typescript").count(), 1);

        assert!(detect_tags("someone/plain").is_empty());
    }
}
