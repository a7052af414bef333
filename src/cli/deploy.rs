use clap::Args;
use std::path::PathBuf;

use crate::domain::request::{
    DEFAULT_MAX_INSTANCES, DEFAULT_MEMORY, DEFAULT_MIN_INSTANCES, DEFAULT_RUNTIME, DEFAULT_TIMEOUT,
};

/// Arguments for the deploy command
///
/// Both positionals are optional at the parser level so that a missing one
/// is reported with fnship's own usage error and exit code.
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Service directory containing main.py and local_env.yaml
    pub service_dir: Option<PathBuf>,

    /// Name of the function to deploy
    pub function_name: Option<String>,

    /// Show what would be packaged and run without doing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Remove the uploaded archive when the deploy step fails
    #[arg(long)]
    pub cleanup_remote_on_failure: bool,

    /// Additional file-name glob to leave out of the archive (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub excludes: Vec<String>,

    /// Runtime identifier
    #[arg(long, default_value = DEFAULT_RUNTIME)]
    pub runtime: String,

    /// Memory per instance
    #[arg(long, default_value = DEFAULT_MEMORY)]
    pub memory: String,

    /// Request timeout
    #[arg(long, default_value = DEFAULT_TIMEOUT)]
    pub timeout: String,

    /// Minimum number of instances
    #[arg(long, default_value_t = DEFAULT_MIN_INSTANCES)]
    pub min_instances: u32,

    /// Maximum number of instances
    #[arg(long, default_value_t = DEFAULT_MAX_INSTANCES)]
    pub max_instances: u32,
}
