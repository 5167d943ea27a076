//! Package manager abstraction
//!
//! Bifrost shells out to whichever JavaScript package manager the operator
//! picked. The four supported managers differ only in their install and
//! run-script invocation forms, captured here so callers never build command
//! lines by hand.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// All supported package managers, in display order
    pub fn all() -> Vec<Self> {
        vec![Self::Npm, Self::Pnpm, Self::Yarn, Self::Bun]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Command and arguments to install a project's dependencies
    ///
    /// yarn installs with the bare command; the others use an `install`
    /// subcommand.
    pub fn install_command(&self) -> (&'static str, Vec<&'static str>) {
        match self {
            Self::Npm => ("npm", vec!["install"]),
            Self::Pnpm => ("pnpm", vec!["install"]),
            Self::Yarn => ("yarn", vec![]),
            Self::Bun => ("bun", vec!["install"]),
        }
    }

    /// Command and arguments to add packages to a project
    ///
    /// npm reuses `install`; the others have a dedicated `add` subcommand.
    /// `dev` adds the packages as development dependencies.
    pub fn add_command(&self, dev: bool) -> (&'static str, Vec<&'static str>) {
        let (cmd, mut args) = match self {
            Self::Npm => ("npm", vec!["install"]),
            Self::Pnpm => ("pnpm", vec!["add"]),
            Self::Yarn => ("yarn", vec!["add"]),
            Self::Bun => ("bun", vec!["add"]),
        };
        if dev {
            args.push("-D");
        }
        (cmd, args)
    }

    /// Command and arguments to run a package script
    ///
    /// npm needs `run`; the others invoke scripts directly.
    pub fn run_command<'a>(&self, script: &'a str) -> (&'static str, Vec<&'a str>) {
        match self {
            Self::Npm => ("npm", vec!["run", script]),
            Self::Pnpm => ("pnpm", vec![script]),
            Self::Yarn => ("yarn", vec![script]),
            Self::Bun => ("bun", vec![script]),
        }
    }

    /// Detect the package manager from the environment
    ///
    /// Package managers set `npm_config_user_agent` when they invoke a
    /// process; absent or unrecognized values default to bun.
    pub fn detect() -> Self {
        Self::detect_from_user_agent(std::env::var("npm_config_user_agent").ok().as_deref())
    }

    fn detect_from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(user_agent) = user_agent else {
            return Self::Bun;
        };

        if user_agent.starts_with("pnpm") {
            Self::Pnpm
        } else if user_agent.starts_with("yarn") {
            Self::Yarn
        } else if user_agent.starts_with("bun") {
            Self::Bun
        } else if user_agent.starts_with("npm") {
            Self::Npm
        } else {
            Self::Bun
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            other => Err(Error::invalid_package_manager(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("npm".parse::<PackageManager>().unwrap(), PackageManager::Npm);
        assert_eq!("bun".parse::<PackageManager>().unwrap(), PackageManager::Bun);
        assert!("cargo".parse::<PackageManager>().is_err());
    }

    #[test]
    fn test_install_command_forms() {
        assert_eq!(
            PackageManager::Npm.install_command(),
            ("npm", vec!["install"])
        );
        // yarn installs with the bare command
        assert_eq!(PackageManager::Yarn.install_command(), ("yarn", vec![]));
    }

    #[test]
    fn test_run_command_forms() {
        assert_eq!(
            PackageManager::Npm.run_command("dev"),
            ("npm", vec!["run", "dev"])
        );
        assert_eq!(PackageManager::Pnpm.run_command("dev"), ("pnpm", vec!["dev"]));
    }

    #[test]
    fn test_add_command_dev_flag() {
        let (cmd, args) = PackageManager::Npm.add_command(true);
        assert_eq!(cmd, "npm");
        assert_eq!(args, vec!["install", "-D"]);

        let (cmd, args) = PackageManager::Bun.add_command(false);
        assert_eq!(cmd, "bun");
        assert_eq!(args, vec!["add"]);
    }

    #[test]
    fn test_detect_from_user_agent() {
        let detect = PackageManager::detect_from_user_agent;
        assert_eq!(detect(Some("pnpm/9.0.0 npm/? node/v20")), PackageManager::Pnpm);
        assert_eq!(detect(Some("yarn/4.1.0 npm/?")), PackageManager::Yarn);
        assert_eq!(detect(Some("npm/10.2.0 node/v20")), PackageManager::Npm);
        assert_eq!(detect(Some("bun/1.1.0")), PackageManager::Bun);
        assert_eq!(detect(None), PackageManager::Bun);
        assert_eq!(detect(Some("something-else")), PackageManager::Bun);
    }
}
