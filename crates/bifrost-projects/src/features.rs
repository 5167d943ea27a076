//! Optional feature installs layered onto a freshly cloned template
//!
//! Each feature is independently toggleable at the prompt. The MIÐGARÐR
//! component kit ships its own Tailwind setup, so selecting it supersedes
//! the standalone Tailwind installs.

use crate::error::{Error, Result};
use crate::install::add_packages;
use bifrost_core::PackageManager;
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

/// Independently toggleable feature installs
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureFlags {
    /// Tailwind CSS with the stock config
    pub tailwind_base: bool,
    /// Tailwind CSS with the @a5gard/ngin preset
    pub tailwind_ngin: bool,
    /// @a5gard/midgardr UI components
    pub midgardr: bool,
    /// @a5gard/baldr icon set
    pub baldr: bool,
}

impl FeatureFlags {
    /// Whether any feature install will run
    pub fn any(&self) -> bool {
        self.tailwind_base || self.tailwind_ngin || self.midgardr || self.baldr
    }
}

/// Run the selected feature installs in order
pub async fn install_features(
    project_dir: &Utf8Path,
    pm: PackageManager,
    features: &FeatureFlags,
) -> Result<()> {
    if features.midgardr {
        install_midgardr(project_dir, features.tailwind_ngin).await?;
    } else {
        if features.tailwind_base {
            install_tailwind(project_dir, pm, false).await?;
        }
        if features.tailwind_ngin {
            install_tailwind(project_dir, pm, true).await?;
        }
    }

    if features.baldr {
        add_packages(project_dir, pm, &["@a5gard/baldr".to_string()], false).await?;
    }

    Ok(())
}

const TAILWIND_PACKAGES: &[&str] = &["tailwindcss", "postcss", "autoprefixer"];

const TAILWIND_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

const NGIN_TAILWIND_CONFIG: &str = r#"import type { Config } from 'tailwindcss';
import ngin from '@a5gard/ngin';

export default {
  presets: [ngin],
  content: ['./app/**/*.{js,jsx,ts,tsx}'],
} satisfies Config;
"#;

/// Install Tailwind CSS, optionally wired to the ngin preset
pub async fn install_tailwind(
    project_dir: &Utf8Path,
    pm: PackageManager,
    use_ngin: bool,
) -> Result<()> {
    let packages: Vec<String> = TAILWIND_PACKAGES.iter().map(|p| p.to_string()).collect();
    add_packages(project_dir, pm, &packages, true).await?;

    run_feature_command(project_dir, "npx", &["tailwindcss", "init", "-p"]).await?;

    if use_ngin {
        std::fs::write(project_dir.join("tailwind.config.ts"), NGIN_TAILWIND_CONFIG)?;
    }

    inject_tailwind_directives(project_dir)?;
    Ok(())
}

/// Prepend the @tailwind directives to the app stylesheet
///
/// Prefers `app/tailwind.css`, falls back to `app/root.css`, and creates the
/// former when neither exists. Stylesheets that already reference @tailwind
/// are left untouched.
fn inject_tailwind_directives(project_dir: &Utf8Path) -> Result<()> {
    let tailwind_css = project_dir.join("app/tailwind.css");
    let root_css = project_dir.join("app/root.css");

    let css_path = if tailwind_css.exists() {
        tailwind_css
    } else if root_css.exists() {
        root_css
    } else {
        tailwind_css
    };

    if css_path.exists() {
        let existing = std::fs::read_to_string(&css_path)?;
        if !existing.contains("@tailwind") {
            std::fs::write(&css_path, format!("{TAILWIND_DIRECTIVES}{existing}"))?;
        }
    } else {
        if let Some(parent) = css_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&css_path, TAILWIND_DIRECTIVES)?;
    }

    Ok(())
}

/// Install the MIÐGARÐR component kit via its own installer
async fn install_midgardr(project_dir: &Utf8Path, with_ngin: bool) -> Result<()> {
    let command = if with_ngin { "full-w-ngin" } else { "full-install" };
    run_feature_command(project_dir, "bunx", &["@a5gard/midgardr", command]).await
}

async fn run_feature_command(project_dir: &Utf8Path, cmd: &str, args: &[&str]) -> Result<()> {
    debug!("Running: {} {}", cmd, args.join(" "));

    let output = Command::new(cmd)
        .current_dir(project_dir)
        .args(args)
        .output()
        .await
        .map_err(|e| Error::install_failed(format!("failed to run {cmd}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::install_failed(stderr.trim().to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inject_creates_stylesheet_when_absent() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();

        inject_tailwind_directives(dir).unwrap();

        let css = std::fs::read_to_string(dir.join("app/tailwind.css")).unwrap();
        assert!(css.starts_with("@tailwind base;"));
    }

    #[test]
    fn test_inject_prepends_to_existing_stylesheet() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        std::fs::create_dir_all(dir.join("app")).unwrap();
        std::fs::write(dir.join("app/root.css"), "body { margin: 0; }\n").unwrap();

        inject_tailwind_directives(dir).unwrap();

        let css = std::fs::read_to_string(dir.join("app/root.css")).unwrap();
        assert!(css.starts_with("@tailwind base;"));
        assert!(css.contains("body { margin: 0; }"));
    }

    #[test]
    fn test_inject_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        std::fs::create_dir_all(dir.join("app")).unwrap();
        std::fs::write(dir.join("app/tailwind.css"), TAILWIND_DIRECTIVES).unwrap();

        inject_tailwind_directives(dir).unwrap();

        let css = std::fs::read_to_string(dir.join("app/tailwind.css")).unwrap();
        assert_eq!(css, TAILWIND_DIRECTIVES);
    }

    #[test]
    fn test_flags_any() {
        assert!(!FeatureFlags::default().any());
        assert!(FeatureFlags {
            baldr: true,
            ..Default::default()
        }
        .any());
    }
}
