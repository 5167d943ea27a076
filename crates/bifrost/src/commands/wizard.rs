//! `bifrost wizard` command handler
//!
//! Interactive builder for a project's `config.bifrost`. Unlike project
//! generation, the wizard may overwrite an existing descriptor - after an
//! explicit confirmation.

use anyhow::{bail, Result};
use bifrost_core::descriptor::{read_descriptor, TemplateDescriptor, DESCRIPTOR_FILE};
use camino::{Utf8Path, Utf8PathBuf};
use console::style;
use dialoguer::{Confirm, Input};
use regex::Regex;
use tokio::process::Command;
use tracing::debug;

use crate::cli::WizardArgs;
use crate::output;
use crate::prompts::{prompt_list, prompt_required};

/// Run the descriptor wizard in the current directory
pub async fn run(_args: WizardArgs) -> Result<()> {
    let cwd = current_dir()?;
    run_wizard(&cwd).await?;
    Ok(())
}

/// Build (or load) the descriptor for a project directory
///
/// Returns the existing descriptor untouched when the operator declines to
/// overwrite it.
pub async fn run_wizard(project_dir: &Utf8Path) -> Result<TemplateDescriptor> {
    output::header("Config.bifrost Wizard");

    if let Some(existing) = read_descriptor(project_dir)? {
        let overwrite = Confirm::new()
            .with_prompt("config.bifrost already exists. Overwrite?")
            .default(false)
            .interact()?;

        if !overwrite {
            return Ok(existing);
        }
    }

    let detected_repo = detect_github_repo(project_dir).await;

    let name = prompt_required("Template name")?;
    let description = prompt_required("Description")?;
    let platform: String = Input::new()
        .with_prompt("Platform")
        .default("remix".to_string())
        .interact_text()?;
    let github = prompt_github_repo(detected_repo)?;
    let tags = prompt_list("Tags (comma-separated)", true)?;
    let post_install = prompt_list("Post-install scripts (comma-separated script names)", false)?;
    let plugins = prompt_list("Plugins to include (comma-separated owner/repo)", false)?;

    let descriptor = TemplateDescriptor {
        name,
        description,
        platform,
        github,
        tags,
        post_install,
        plugins,
    };

    std::fs::write(project_dir.join(DESCRIPTOR_FILE), descriptor.to_json()?)?;

    println!();
    output::success("config.bifrost created successfully!");
    println!();
    println!("{}", style("Configuration:").cyan());
    output::rule();
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    output::rule();

    Ok(descriptor)
}

fn prompt_github_repo(detected: Option<String>) -> Result<String> {
    let reference_re = Regex::new(r"^[\w-]+/[\w.-]+$").expect("valid regex");

    let mut input = Input::new().with_prompt("GitHub repository (owner/repo)");
    if let Some(detected) = detected {
        input = input.default(detected);
    }

    let github: String = input
        .validate_with(move |value: &String| -> Result<(), &str> {
            if reference_re.is_match(value) {
                Ok(())
            } else {
                Err("Invalid format. Use: owner/repo")
            }
        })
        .interact_text()?;

    Ok(github)
}

/// Detect the project's GitHub `owner/repo`
///
/// Checks the git origin remote first, then the `package.json` repository
/// field. Either may be absent; detection failure just drops the default.
pub async fn detect_github_repo(project_dir: &Utf8Path) -> Option<String> {
    if let Some(reference) = github_repo_from_git(project_dir).await {
        return Some(reference);
    }
    github_repo_from_package_json(project_dir)
}

async fn github_repo_from_git(project_dir: &Utf8Path) -> Option<String> {
    let output = Command::new("git")
        .current_dir(project_dir)
        .args(["config", "--get", "remote.origin.url"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    extract_github_reference(&url)
}

fn github_repo_from_package_json(project_dir: &Utf8Path) -> Option<String> {
    let path = project_dir.join("package.json");
    let content = std::fs::read_to_string(path).ok()?;
    let package: serde_json::Value = serde_json::from_str(&content).ok()?;

    let repository = match &package["repository"] {
        serde_json::Value::String(url) => url.clone(),
        other => other["url"].as_str()?.to_string(),
    };

    extract_github_reference(&repository)
}

/// Pull `owner/repo` out of a github.com remote URL
fn extract_github_reference(url: &str) -> Option<String> {
    let re = Regex::new(r"github\.com[:/](.+?)(?:\.git)?/?$").expect("valid regex");
    let captured = re.captures(url)?.get(1)?.as_str().to_string();

    if captured.is_empty() {
        debug!("Remote URL {} has no usable owner/repo", url);
        return None;
    }

    Some(captured)
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    match Utf8PathBuf::from_path_buf(cwd) {
        Ok(cwd) => Ok(cwd),
        Err(path) => bail!("Current directory is not valid UTF-8: {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_github_reference() {
        assert_eq!(
            extract_github_reference("https://github.com/someone/template.git"),
            Some("someone/template".to_string())
        );
        assert_eq!(
            extract_github_reference("git@github.com:someone/template.git"),
            Some("someone/template".to_string())
        );
        assert_eq!(
            extract_github_reference("https://github.com/someone/template"),
            Some("someone/template".to_string())
        );
        assert_eq!(extract_github_reference("https://example.com/x/y"), None);
    }

    #[test]
    fn test_github_repo_from_package_json() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();

        std::fs::write(
            dir.join("package.json"),
            r#"{"repository": {"type": "git", "url": "https://github.com/someone/app.git"}}"#,
        )
        .unwrap();

        assert_eq!(
            github_repo_from_package_json(dir),
            Some("someone/app".to_string())
        );
    }

    #[test]
    fn test_github_repo_from_package_json_string_form() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();

        std::fs::write(
            dir.join("package.json"),
            r#"{"repository": "github.com/someone/app"}"#,
        )
        .unwrap();

        assert_eq!(
            github_repo_from_package_json(dir),
            Some("someone/app".to_string())
        );
    }
}
