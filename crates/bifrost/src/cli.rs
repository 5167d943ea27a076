//! CLI argument parsing with clap

use bifrost_core::PackageManager;
use clap::{Args, Parser, Subcommand};

/// Bifrost - create projects from platform-agnostic community templates
#[derive(Parser, Debug)]
#[command(name = "bifrost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from a template
    New(NewArgs),

    /// List available community templates
    Templates(TemplatesArgs),

    /// Create or update the project's config.bifrost interactively
    Wizard(WizardArgs),

    /// Submit the project's template definition to the community registry
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// The project name
    pub name: Option<String>,

    /// The template to use (format: owner/repo)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Package manager to use (npm, pnpm, yarn, bun)
    #[arg(short = 'p', long = "pkg-mgr")]
    pub package_manager: Option<PackageManager>,

    /// Skip dependency installation
    #[arg(long)]
    pub no_install: bool,

    /// Push the initial commit to GitHub after creation
    #[arg(long)]
    pub git_push: bool,

    /// Install Tailwind CSS with the stock config
    #[arg(long)]
    pub tailwind: bool,

    /// Install Tailwind CSS with the @a5gard/ngin preset
    #[arg(long)]
    pub ngin: bool,

    /// Install @a5gard/midgardr UI components
    #[arg(long)]
    pub midgardr: bool,

    /// Install @a5gard/baldr icons
    #[arg(long)]
    pub baldr: bool,
}

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct WizardArgs {}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}
