//! Interactive prompt flows for options not supplied as flags

use anyhow::{bail, Context, Result};
use bifrost_core::{PackageManager, StackReference};
use bifrost_registry::RegistryEntry;
use console::style;
use dialoguer::{Confirm, Input, Select};

/// Fully resolved options for `bifrost new`
#[derive(Debug, Clone)]
pub struct NewOptions {
    pub project_name: String,
    pub template: String,
    pub package_manager: PackageManager,
    pub install: bool,
    pub git_push: bool,
}

/// Prompt for every `new` option missing from the command line
///
/// Flags that were given are taken as-is; only the gaps prompt.
pub fn prompt_missing_options(
    project_name: Option<String>,
    template: Option<String>,
    package_manager: Option<PackageManager>,
    install: Option<bool>,
    git_push: Option<bool>,
    registry: &[RegistryEntry],
) -> Result<NewOptions> {
    let project_name = match project_name {
        Some(name) => name,
        None => prompt_project_name()?,
    };

    let template = match template {
        Some(template) => template,
        None => prompt_template(registry)?,
    };

    let package_manager = match package_manager {
        Some(pm) => pm,
        None => prompt_package_manager()?,
    };

    let install = match install {
        Some(install) => install,
        None => Confirm::new()
            .with_prompt("Install dependencies once the project has initialized?")
            .default(true)
            .interact()?,
    };

    let git_push = match git_push {
        Some(git_push) => git_push,
        None => Confirm::new()
            .with_prompt("Create and push the first commit to GitHub?")
            .default(false)
            .interact()?,
    };

    Ok(NewOptions {
        project_name,
        template,
        package_manager,
        install,
        git_push,
    })
}

fn prompt_project_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("What would you like to name your new project?")
        .default("my-bifrost-app".to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Project name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(name)
}

/// Pick a template: a platform, then one of its registry entries, or a
/// custom `owner/repo` reference
fn prompt_template(registry: &[RegistryEntry]) -> Result<String> {
    let mut platforms: Vec<String> = Vec::new();
    for entry in registry {
        if !platforms.contains(&entry.platform) {
            platforms.push(entry.platform.clone());
        }
    }

    let mut choices = platforms.clone();
    choices.push("custom (owner/repo)".to_string());

    let selection = Select::new()
        .with_prompt("Which platform would you like to use?")
        .items(&choices)
        .default(0)
        .interact()?;

    if selection == platforms.len() {
        return prompt_custom_template();
    }

    let platform = &platforms[selection];
    let templates: Vec<&RegistryEntry> = registry
        .iter()
        .filter(|entry| &entry.platform == platform)
        .collect();

    let items: Vec<String> = templates
        .iter()
        .map(|entry| {
            format!(
                "{} {}",
                entry.reference(),
                style(&entry.description).dim()
            )
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Select a template")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(templates[selection].reference())
}

fn prompt_custom_template() -> Result<String> {
    let reference: String = Input::new()
        .with_prompt("Enter template (owner/repo)")
        .validate_with(|input: &String| -> Result<(), String> {
            StackReference::parse(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(reference)
}

fn prompt_package_manager() -> Result<PackageManager> {
    let detected = PackageManager::detect();
    let managers = PackageManager::all();
    let items: Vec<&str> = managers.iter().map(|pm| pm.as_str()).collect();
    let default = managers
        .iter()
        .position(|pm| *pm == detected)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Which package manager do you prefer?")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(managers[selection])
}

/// Prompt for a comma-separated list, returning trimmed non-empty values
pub fn prompt_list(prompt: &str, required: bool) -> Result<Vec<String>> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(!required)
        .interact_text()?;

    let values: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    if required && values.is_empty() {
        bail!("At least one value is required");
    }

    Ok(values)
}

/// Prompt for a required free-text value
pub fn prompt_required(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("A value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("prompt cancelled")
}
