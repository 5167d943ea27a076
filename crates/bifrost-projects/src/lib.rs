//! # bifrost-projects
//!
//! Project materialization library for the Bifrost CLI providing:
//! - Git operations (clone, init, push) as subprocess calls
//! - Package metadata rewrite (`package.json`)
//! - Dependency, feature, and post-install script execution
//! - Plugin installation from `owner/repo` references
//!
//! The CLI drives these building blocks in a fixed order; this crate owns the
//! individual steps and their failure semantics, not the terminal output.

pub mod error;
pub mod features;
pub mod git;
pub mod install;
pub mod materialize;
pub mod package_json;
pub mod plugins;

pub use error::{Error, Result};
pub use features::FeatureFlags;
pub use materialize::ProjectContext;
