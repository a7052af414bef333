//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - deploy: Deploy arguments (also accepted without the subcommand name)
//! - init: Template service scaffolding arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod deploy;
pub mod init;

pub use completions::CompletionsArgs;
pub use deploy::DeployArgs;
pub use init::InitArgs;

/// fnship - package and deploy HTTP cloud functions
///
/// Zip a service directory, upload it to object storage and deploy it as a
/// managed function with a fixed configuration.
#[derive(Parser, Debug)]
#[command(
    name = "fnship",
    author,
    version,
    args_conflicts_with_subcommands = true,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package, upload and deploy HTTP cloud functions",
    long_about = "fnship zips a service directory (leaving out local_* files), uploads the \
                  archive to the GCS_PATH from the project configuration, and deploys it as a \
                  second-generation HTTP function with fixed runtime, memory, timeout and \
                  instance limits.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  fnship ./inegi_empresas inegi-empresas       \x1b[90m# Deploy a service\x1b[0m\n   \
                  fnship ./svc myfunc --dry-run                \x1b[90m# Show what would run\x1b[0m\n   \
                  fnship -c prod.env ./svc myfunc              \x1b[90m# Use another configuration\x1b[0m\n   \
                  fnship init ./new_service                    \x1b[90m# Scaffold a template service\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project configuration file with PROJECT_ID, REGION and GCS_PATH (defaults to ./.env)
    #[arg(long, short = 'c', global = true, env = "FNSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub deploy: DeployArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package, upload and deploy a service directory
    #[command(after_help = "EXAMPLES:\n  \
                  Deploy a service directory:\n    fnship deploy ./inegi_empresas inegi-empresas\n\n\
                  Preview without uploading anything:\n    fnship deploy ./svc myfunc --dry-run\n\n\
                  Preview as JSON:\n    fnship deploy ./svc myfunc --dry-run --json\n\n\
                  Remove the uploaded archive if the deploy fails:\n    fnship deploy ./svc myfunc --cleanup-remote-on-failure\n\n\
                  Leave notebooks out of the archive:\n    fnship deploy ./svc myfunc --exclude '*.ipynb'")]
    Deploy(DeployArgs),

    /// Scaffold a template service directory
    Init(InitArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
