//! `bifrost new` command handler
//!
//! Drives the materialization stages in a fixed order: validate, clone,
//! rewrite metadata, the optional install block (dependencies, feature
//! add-ons, post-install scripts, plugins), git init, descriptor write, and
//! the optional push. Optional stages fail soft: a warning, never an abort.

use anyhow::Result;
use bifrost_core::descriptor::{read_descriptor, write_descriptor_if_absent, DescriptorSeed};
use bifrost_core::stack::{detect_platform, detect_tags};
use bifrost_core::{to_valid_package_name, PluginFile, StackReference};
use bifrost_projects::features::install_features;
use bifrost_projects::git::{clone_template, init_repository, push_to_origin};
use bifrost_projects::install::{install_dependencies, run_post_install_scripts};
use bifrost_projects::materialize::{validate_target_dir, ProjectContext};
use bifrost_projects::package_json::update_package_json;
use bifrost_projects::plugins::install_plugins;
use bifrost_projects::FeatureFlags;
use console::style;
use dialoguer::Input;

use crate::cli::NewArgs;
use crate::output;
use crate::prompts::prompt_missing_options;

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from bifrost";

/// Create a new project from a template
pub async fn run(args: NewArgs) -> Result<()> {
    let registry = bifrost_registry::bundled_registry()?;

    let options = prompt_missing_options(
        args.name,
        args.template,
        args.package_manager,
        args.no_install.then_some(false),
        args.git_push.then_some(true),
        &registry,
    )?;

    let context = ProjectContext {
        project_name: to_valid_package_name(&options.project_name),
        template: StackReference::parse(&options.template)?,
        package_manager: options.package_manager,
        install: options.install,
        git_push: options.git_push,
        features: FeatureFlags {
            tailwind_base: args.tailwind,
            tailwind_ngin: args.ngin,
            midgardr: args.midgardr,
            baldr: args.baldr,
        },
    };

    create_project(&context).await
}

async fn create_project(context: &ProjectContext) -> Result<()> {
    let target = context.target_dir();
    let pm = context.package_manager;

    output::header("Creating your Bifrost project...");

    // Validate before any network call
    validate_target_dir(&target)?;

    let spinner = output::spinner(&format!("Cloning {}...", context.template));
    match clone_template(&context.template, &target).await {
        Ok(()) => spinner.finish_with_message(format!("Cloned {}", context.template)),
        Err(e) => {
            spinner.finish_and_clear();
            output::error(&format!("Failed to clone {}", context.template));
            return Err(e.into());
        }
    }

    let spinner = output::spinner("Updating package.json...");
    match update_package_json(&target, &context.project_name) {
        Ok(()) => spinner.finish_with_message("Updated package.json"),
        Err(e) => {
            spinner.finish_and_clear();
            output::error("Failed to update package.json");
            return Err(e.into());
        }
    }

    // A descriptor shipped inside the template seeds later stages
    let template_descriptor = read_descriptor(&target).unwrap_or_default();

    if context.install {
        let spinner = output::spinner(&format!("Installing dependencies with {pm}..."));
        match install_dependencies(&target, pm).await {
            Ok(()) => spinner.finish_with_message(format!("Installed dependencies with {pm}")),
            Err(e) => {
                spinner.finish_and_clear();
                output::error("Failed to install dependencies");
                return Err(e.into());
            }
        }

        if context.features.any() {
            let spinner = output::spinner("Installing feature add-ons...");
            match install_features(&target, pm, &context.features).await {
                Ok(()) => spinner.finish_with_message("Installed feature add-ons"),
                Err(e) => {
                    spinner.finish_and_clear();
                    output::error("Failed to install feature add-ons");
                    return Err(e.into());
                }
            }
        }

        if let Some(descriptor) = &template_descriptor {
            if !descriptor.post_install.is_empty() {
                let spinner = output::spinner("Running post-install scripts...");
                match run_post_install_scripts(&target, pm, &descriptor.post_install).await {
                    Ok(failed) if failed.is_empty() => {
                        spinner.finish_with_message("Completed post-install scripts");
                    }
                    Ok(failed) => {
                        spinner.finish_and_clear();
                        output::warning(&format!(
                            "Some post-install scripts failed: {}",
                            failed.join(", ")
                        ));
                    }
                    Err(e) => {
                        spinner.finish_and_clear();
                        output::warning(&format!("Some post-install scripts failed: {e}"));
                    }
                }
            }

            if !descriptor.plugins.is_empty() {
                println!();
                println!(
                    "{}",
                    style(format!(
                        "Found {} plugin(s) to install",
                        descriptor.plugins.len()
                    ))
                    .bold()
                );

                let mut resolver = prompt_file_location;
                let failures =
                    install_plugins(&target, pm, &descriptor.plugins, &mut resolver).await;
                for (plugin, error) in failures {
                    output::error(&format!("Failed to install plugin {plugin}: {error}"));
                }
            }
        }
    }

    let spinner = output::spinner("Initializing git repository...");
    match init_repository(&target, INITIAL_COMMIT_MESSAGE).await {
        Ok(()) => spinner.finish_with_message("Initialized git repository"),
        // Local git misconfiguration must not fail the run
        Err(_) => spinner.finish_with_message("Skipped git initialization"),
    }

    let spinner = output::spinner("Creating config.bifrost...");
    let seed = DescriptorSeed {
        name: context.project_name.clone(),
        github: context.template.to_string(),
        platform: detect_platform(&context.template.to_string()).map(str::to_string),
        tags: Some(detect_tags(&context.template.to_string())).filter(|tags| !tags.is_empty()),
        existing: template_descriptor,
    };
    match write_descriptor_if_absent(&target, seed) {
        Ok(_) => spinner.finish_with_message("Created config.bifrost"),
        Err(e) => {
            spinner.finish_and_clear();
            output::warning(&format!("Failed to create config.bifrost: {e}"));
        }
    }

    if context.git_push {
        let spinner = output::spinner("Pushing to GitHub...");
        match push_to_origin(&target).await {
            Ok(()) => spinner.finish_with_message("Pushed to GitHub"),
            Err(_) => {
                spinner.finish_and_clear();
                output::warning(
                    "Failed to push to GitHub - you may need to set up a remote repository first",
                );
            }
        }
    }

    println!();
    output::success("Project created successfully!");
    println!();

    if !context.install {
        println!("{}", style("Next steps:").bold());
        println!("  {} {}", style("cd").cyan(), context.project_name);
        let (cmd, args) = pm.install_command();
        println!("  {}", style(format!("{cmd} {}", args.join(" ")).trim()).cyan());
        let (cmd, args) = pm.run_command("dev");
        println!("  {}", style(format!("{cmd} {}", args.join(" "))).cyan());
    } else {
        println!("{}", style("Start the dev server:").bold());
        println!("  {} {}", style("cd").cyan(), context.project_name);
        let (cmd, args) = pm.run_command("dev");
        println!("  {}", style(format!("{cmd} {}", args.join(" "))).cyan());
    }
    println!();

    Ok(())
}

/// Confirm or override the suggested destination for a plugin file
fn prompt_file_location(file: &PluginFile) -> bifrost_projects::Result<String> {
    let location: String = Input::new()
        .with_prompt(format!("Location for {}", style(&file.name).cyan()))
        .default(file.location.clone())
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Location is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| bifrost_projects::Error::Io(std::io::Error::other(e.to_string())))?;

    Ok(location)
}
