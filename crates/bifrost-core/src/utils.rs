//! Shared utility functions for Bifrost crates

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn invalid_chars_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9-~]+").unwrap())
}

/// Sanitize a display name into a valid npm package name
///
/// Lowercases, collapses whitespace runs to hyphens, strips a leading `.` or
/// `_`, collapses every other disallowed character run to a hyphen, and trims
/// hyphens left dangling at either end.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = whitespace_re().replace_all(&lowered, "-");
    let stripped = hyphenated
        .strip_prefix(['.', '_'])
        .map(str::to_string)
        .unwrap_or_else(|| hyphenated.to_string());
    let cleaned = invalid_chars_re().replace_all(&stripped, "-");

    cleaned.trim_matches('-').to_string()
}

/// Check whether a name is already a valid sanitized package name
pub fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty() && to_valid_package_name(name) == name
}
