//! `bifrost submit` command handler
//!
//! Publishes the current project's template definition to the community
//! registry. The repository must be publicly cloneable before anything is
//! sent: the public-visibility gate runs - and may abort - before the
//! registry is contacted at all.

use anyhow::{bail, Result};
use bifrost_core::descriptor::read_descriptor;
use bifrost_core::{StackReference, TemplateDescriptor};
use bifrost_registry::submit::submit_entry;
use bifrost_registry::{remote, RegistryEntry, Error as RegistryError, REGISTRY_FILE, REGISTRY_REPO};
use camino::{Utf8Path, Utf8PathBuf};
use console::style;
use dialoguer::Confirm;

use crate::cli::SubmitArgs;
use crate::commands::wizard::run_wizard;
use crate::output;

/// Submit the project's template definition to the registry
pub async fn run(args: SubmitArgs) -> Result<()> {
    output::header("Submit Template to Registry");

    let cwd = current_dir()?;
    let descriptor = load_or_create_descriptor(&cwd).await?;

    verify_repository_public(&descriptor).await?;

    print_summary(&descriptor);

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Submit this template to the registry?")
            .default(true)
            .interact()?;

        if !confirmed {
            output::info("Submission cancelled");
            return Ok(());
        }
    }

    let entry = RegistryEntry::from_descriptor(&descriptor)?;

    let spinner = output::spinner("Submitting template to the registry...");
    match submit_entry(entry, &descriptor.name).await {
        Ok(pr_url) => {
            spinner.finish_and_clear();
            println!();
            output::success("Template submitted successfully!");
            println!();
            output::kv("Pull Request", &pr_url);
            println!(
                "{}",
                style("Your template will be available once the PR is merged.").dim()
            );
            Ok(())
        }
        Err(RegistryError::GhNotFound) => {
            spinner.finish_and_clear();
            output::error("GitHub CLI (gh) is not installed");
            print_manual_steps();
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            Err(e.into())
        }
    }
}

/// Load the descriptor, offering the wizard when the project has none
async fn load_or_create_descriptor(project_dir: &Utf8Path) -> Result<TemplateDescriptor> {
    if let Some(descriptor) = read_descriptor(project_dir)? {
        return Ok(descriptor);
    }

    output::warning("config.bifrost not found");

    let run = Confirm::new()
        .with_prompt("Would you like to run the config wizard to create it?")
        .default(true)
        .interact()?;

    if !run {
        bail!("config.bifrost is required for submission");
    }

    run_wizard(project_dir).await
}

/// Gate: the template's repository must be publicly reachable
///
/// On failure the operator gets exactly one chance to flip the repository
/// public and re-verify; a second failure aborts the submission before the
/// registry is contacted.
async fn verify_repository_public(descriptor: &TemplateDescriptor) -> Result<()> {
    let reference = StackReference::parse(&descriptor.github)?;

    let spinner = output::spinner("Verifying repository...");
    let public = remote::verify_public_repo(&reference).await;
    spinner.finish_and_clear();

    if public {
        return Ok(());
    }

    output::error("Repository must be public");
    println!(
        "{}",
        style("Please make your repository public before submitting").yellow()
    );

    let made_public = Confirm::new()
        .with_prompt("Have you made the repository public?")
        .default(false)
        .interact()?;

    if !made_public {
        bail!("Submission cancelled");
    }

    let spinner = output::spinner("Re-verifying repository...");
    let public = remote::verify_public_repo(&reference).await;
    spinner.finish_and_clear();

    if !public {
        bail!("Repository {} is still not public", descriptor.github);
    }

    Ok(())
}

fn print_summary(descriptor: &TemplateDescriptor) {
    println!();
    println!("{}", style("Template Information:").cyan());
    output::rule();
    output::kv("Name", &descriptor.name);
    output::kv("Description", &descriptor.description);
    output::kv("Platform", &descriptor.platform);
    output::kv("GitHub", &descriptor.github);
    output::kv("Tags", &descriptor.tags.join(", "));
    if !descriptor.post_install.is_empty() {
        output::kv("Post-Install", &descriptor.post_install.join(", "));
    }
    if !descriptor.plugins.is_empty() {
        output::kv("Plugins", &descriptor.plugins.join(", "));
    }
    output::rule();
}

fn print_manual_steps() {
    println!();
    println!("{}", style("Manual submission steps:").yellow());
    println!(
        "{}",
        style(format!(
            "1. Fork the repository: https://github.com/{REGISTRY_REPO}"
        ))
        .dim()
    );
    println!("{}", style("2. Clone your fork").dim());
    println!(
        "{}",
        style(format!("3. Add your template to {REGISTRY_FILE}")).dim()
    );
    println!("{}", style("4. Commit and push changes").dim());
    println!("{}", style("5. Create a pull request").dim());
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    match Utf8PathBuf::from_path_buf(cwd) {
        Ok(cwd) => Ok(cwd),
        Err(path) => bail!("Current directory is not valid UTF-8: {}", path.display()),
    }
}
