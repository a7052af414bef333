//! Deployment orchestrator
//!
//! Runs the linear pipeline behind `fnship <SERVICE_DIR> <FUNCTION_NAME>`:
//!
//! 1. validate the env file and select the files to package
//! 2. package them into `<function>.zip` in the working directory
//! 3. upload the archive under the configured storage prefix
//! 4. deploy the function from the uploaded archive
//! 5. remove the local archive, whatever the deploy outcome
//!
//! Every external step's exit status is checked. A failure stops the
//! pipeline with an error whose exit code tells how far the run got.

pub mod plan;

pub use plan::DeploymentPlan;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::archive::ArchiveArtifact;
use crate::config::ProjectConfig;
use crate::domain::DeploymentRequest;
use crate::error::Result;
use crate::error::tool::{deploy_failed, deploy_failed_remote_removed, upload_failed};
use crate::service::{EnvFile, ExcludeSet, ServiceDir};
use crate::tools::{CommandRunner, Toolchain};
use crate::ui;

const TOTAL_STEPS: usize = 3;

/// Options for a deployment run
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Validate and print the plan without touching anything
    pub dry_run: bool,
    /// Remove the uploaded archive when the deploy step fails
    pub cleanup_remote_on_failure: bool,
    /// Extra exclude globs on top of the local-only convention
    pub excludes: Vec<String>,
    /// Directory the archive is created in
    pub work_dir: PathBuf,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            cleanup_remote_on_failure: false,
            excludes: Vec::new(),
            work_dir: PathBuf::from("."),
        }
    }
}

/// How a run ended
#[derive(Debug)]
pub enum DeployOutcome {
    /// Dry run: nothing was executed
    Planned(DeploymentPlan),
    /// Packaged, uploaded and deployed
    Deployed(DeploymentPlan),
}

/// Main orchestrator for the deploy operation
pub struct DeployOperation<'a> {
    request: &'a DeploymentRequest,
    config: &'a ProjectConfig,
    toolchain: &'a Toolchain,
    runner: &'a dyn CommandRunner,
    options: DeployOptions,
}

impl<'a> DeployOperation<'a> {
    pub fn new(
        request: &'a DeploymentRequest,
        config: &'a ProjectConfig,
        toolchain: &'a Toolchain,
        runner: &'a dyn CommandRunner,
        options: DeployOptions,
    ) -> Self {
        Self {
            request,
            config,
            toolchain,
            runner,
            options,
        }
    }

    /// Resolve everything a run needs, without side effects
    pub fn plan(&self, service: &ServiceDir) -> Result<DeploymentPlan> {
        let env_file = EnvFile::load(&self.request.env_file())?;
        let excludes = ExcludeSet::with_extra(&self.options.excludes)?;
        let selection = service.select(&excludes)?;

        let archive_name = self.request.archive_name();
        let archive = self.options.work_dir.join(&archive_name);
        let remote_object = self.config.remote_object(&archive_name);

        Ok(DeploymentPlan {
            package: self.toolchain.package(&archive, &selection.included),
            upload: self.toolchain.upload(&archive, &remote_object),
            deploy: self
                .toolchain
                .deploy(self.request, self.config, &remote_object),
            request: self.request.clone(),
            config: self.config.clone(),
            env_vars: env_file.names().map(str::to_string).collect(),
            archive,
            remote_object,
            selection,
        })
    }

    /// Execute the deploy operation
    pub fn execute(&self, service: &ServiceDir) -> Result<DeployOutcome> {
        let plan = self.plan(service)?;
        if self.options.dry_run {
            return Ok(DeployOutcome::Planned(plan));
        }

        let function = &self.request.function_name;
        info!(function = %function, archive = %plan.archive.display(), "packaging");
        ui::step(
            1,
            TOTAL_STEPS,
            &format!(
                "Packaging {} ({} files)",
                plan.archive.display(),
                plan.selection.included.len()
            ),
        );
        let artifact =
            ArchiveArtifact::build(&plan.archive, &plan.selection, self.toolchain, self.runner)?;

        info!(remote = %plan.remote_object, "uploading");
        ui::step(2, TOTAL_STEPS, &format!("Uploading to {}", plan.remote_object));
        self.upload(&plan)?;

        info!(function = %function, region = %self.config.region, "deploying");
        ui::step(
            3,
            TOTAL_STEPS,
            &format!("Deploying {} to {}", function, self.config.region),
        );
        let deployed = self.deploy(&plan);

        // Local cleanup happens whether or not the deploy succeeded.
        drop(artifact);

        if let Err(reason) = deployed {
            let removed = self.options.cleanup_remote_on_failure && self.remove_remote(&plan);
            return Err(if removed {
                deploy_failed_remote_removed(function, &plan.remote_object, reason)
            } else {
                deploy_failed(function, &plan.remote_object, reason)
            });
        }

        Ok(DeployOutcome::Deployed(plan))
    }

    fn upload(&self, plan: &DeploymentPlan) -> Result<()> {
        let archive = plan.archive.display().to_string();
        let status = self.runner.run(&plan.upload).map_err(|e| {
            upload_failed(
                &archive,
                &plan.remote_object,
                format!("could not start `{}`: {}", plan.upload.program(), e),
            )
        })?;
        if !status.success() {
            return Err(upload_failed(
                &archive,
                &plan.remote_object,
                format!("`{}` ended with {}", plan.upload.program(), status.describe()),
            ));
        }
        Ok(())
    }

    /// Run the deploy command; `Err` carries the failure reason
    fn deploy(&self, plan: &DeploymentPlan) -> std::result::Result<(), String> {
        let program = plan.deploy.program();
        let status = self
            .runner
            .run(&plan.deploy)
            .map_err(|e| format!("could not start `{}`: {}", program, e))?;
        if !status.success() {
            return Err(format!("`{}` ended with {}", program, status.describe()));
        }
        Ok(())
    }

    /// Best effort: a failed removal is reported but does not replace the
    /// deploy error. Returns whether the remote archive is gone.
    fn remove_remote(&self, plan: &DeploymentPlan) -> bool {
        let invocation = self.toolchain.remove_remote(&plan.remote_object);
        info!(remote = %plan.remote_object, "removing uploaded archive");
        match self.runner.run(&invocation) {
            Ok(status) if status.success() => {
                ui::note(&format!("Removed uploaded archive {}", plan.remote_object));
                true
            }
            Ok(status) => {
                warn!(
                    remote = %plan.remote_object,
                    status = %status.describe(),
                    "failed to remove uploaded archive"
                );
                false
            }
            Err(e) => {
                warn!(
                    remote = %plan.remote_object,
                    error = %e,
                    "could not start archive removal"
                );
                false
            }
        }
    }
}
