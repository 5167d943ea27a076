//! # bifrost-registry
//!
//! Community template registry for the Bifrost CLI providing:
//! - The bundled default-templates list (`registry.bifrost`)
//! - Remote registry fetch and public-repository verification
//! - Pure reconciliation of a template entry into the registry
//! - The fork + pull-request submission workflow via the `gh` CLI

pub mod bundled;
pub mod entry;
pub mod error;
pub mod reconcile;
pub mod remote;
pub mod submit;

pub use bundled::bundled_registry;
pub use entry::RegistryEntry;
pub use error::{Error, Result};
pub use reconcile::reconcile;

/// Repository hosting the shared community registry
pub const REGISTRY_REPO: &str = "A5GARD/BIFROST";

/// Path of the registry file inside the registry repository
pub const REGISTRY_FILE: &str = "dist/registry.bifrost";

/// Branch the registry file is published on
pub const REGISTRY_BRANCH: &str = "main";
