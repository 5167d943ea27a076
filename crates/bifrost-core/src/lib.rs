//! # bifrost-core
//!
//! Core library for the Bifrost CLI providing:
//! - Template reference parsing (`owner/repo`)
//! - Template descriptor storage (`config.bifrost`)
//! - Plugin manifest reading (`plugin.bifrost`)
//! - Package manager abstraction (npm, pnpm, yarn, bun)

pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod pm;
pub mod stack;
pub mod utils;

pub use descriptor::{DescriptorSeed, TemplateDescriptor, DESCRIPTOR_FILE};
pub use error::{Error, Result};
pub use manifest::{PluginFile, PluginManifest, MANIFEST_FILE};
pub use pm::PackageManager;
pub use stack::StackReference;
pub use utils::to_valid_package_name;
