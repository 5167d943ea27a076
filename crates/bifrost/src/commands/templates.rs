//! `bifrost templates` command handler

use anyhow::Result;
use bifrost_registry::RegistryEntry;
use console::style;

use crate::cli::TemplatesArgs;

/// List the bundled community templates grouped by platform
pub async fn run(args: TemplatesArgs) -> Result<()> {
    let registry = bifrost_registry::bundled_registry()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&registry)?);
        return Ok(());
    }

    println!();
    println!("{}", style("Available Community Templates").bold());
    println!();

    for platform in platforms_in_order(&registry) {
        println!("{}", style(platform.to_uppercase()).cyan().bold());
        println!();

        for entry in registry.iter().filter(|e| e.platform == platform) {
            println!(
                "  {} {}",
                style("›").green(),
                style(entry.reference()).bold()
            );
            println!("    {}", style(&entry.description).dim());
            println!("    {}", style(format!("Tags: {}", entry.tags.join(", "))).dim());
            println!();
        }
    }

    println!(
        "{}{}",
        style("Use any template with: ").dim(),
        style("bifrost new my-app --template owner/repo").cyan()
    );
    println!();

    Ok(())
}

/// Platforms in first-seen order, preserving the registry's ordering
fn platforms_in_order(registry: &[RegistryEntry]) -> Vec<String> {
    let mut platforms = Vec::new();
    for entry in registry {
        if !platforms.contains(&entry.platform) {
            platforms.push(entry.platform.clone());
        }
    }
    platforms
}
