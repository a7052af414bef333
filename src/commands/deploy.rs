//! Deploy command CLI wrapper
//!
//! This module provides the CLI interface for deployments: it checks the
//! arguments, loads the project configuration once, and delegates all
//! pipeline logic to operations/deploy.

use std::path::PathBuf;

use crate::cli::DeployArgs;
use crate::commands::helpers::{program_name, resolve_config_path};
use crate::config::ProjectConfig;
use crate::domain::DeploymentRequest;
use crate::error::{FnshipError, Result};
use crate::operations::deploy::{DeployOperation, DeployOptions, DeployOutcome};
use crate::service::ServiceDir;
use crate::tools::{ProcessRunner, Toolchain};
use crate::ui;

impl From<&DeployArgs> for DeployOptions {
    fn from(args: &DeployArgs) -> Self {
        Self {
            dry_run: args.dry_run,
            cleanup_remote_on_failure: args.cleanup_remote_on_failure,
            excludes: args.excludes.clone(),
            ..Self::default()
        }
    }
}

/// Both positionals, or the usage error
fn required_arguments(args: &DeployArgs) -> Result<(PathBuf, String)> {
    let service_dir = args
        .service_dir
        .clone()
        .filter(|dir| !dir.as_os_str().is_empty());
    let function_name = args
        .function_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    match (service_dir, function_name) {
        (Some(dir), Some(name)) => Ok((dir, name)),
        _ => Err(FnshipError::Usage {
            program: program_name(),
        }),
    }
}

fn build_request(service_dir: PathBuf, function_name: String, args: &DeployArgs) -> DeploymentRequest {
    DeploymentRequest::new(service_dir, function_name)
        .with_runtime(&args.runtime)
        .with_memory(&args.memory)
        .with_timeout(&args.timeout)
        .with_instances(args.min_instances, args.max_instances)
}

/// Run deploy command
///
/// Validation order: arguments, service directory, request settings,
/// project configuration. Nothing is created before all of them pass.
pub fn run(config: Option<PathBuf>, args: DeployArgs) -> Result<()> {
    let (service_dir, function_name) = required_arguments(&args)?;
    let service = ServiceDir::open(&service_dir)?;

    let request = build_request(service_dir, function_name, &args);
    request.validate()?;

    let project = ProjectConfig::load(&resolve_config_path(config))?;
    let toolchain = Toolchain::from_env();

    let operation = DeployOperation::new(
        &request,
        &project,
        &toolchain,
        &ProcessRunner,
        DeployOptions::from(&args),
    );

    match operation.execute(&service)? {
        DeployOutcome::Planned(plan) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", ui::render_plan(&plan));
            }
        }
        DeployOutcome::Deployed(plan) => {
            ui::success(&format!(
                "Deployed {} from {}",
                request.function_name, plan.remote_object
            ));
        }
    }

    Ok(())
}
