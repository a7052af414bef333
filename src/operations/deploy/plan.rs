//! What a deployment will do, computed before any side effect

use std::path::PathBuf;

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::domain::DeploymentRequest;
use crate::service::PackageSelection;
use crate::tools::Invocation;

/// Fully resolved deployment: the files, the remote object and every
/// command line a real run executes, in order.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentPlan {
    pub request: DeploymentRequest,
    pub config: ProjectConfig,
    /// Local archive path, relative to the working directory
    pub archive: PathBuf,
    pub remote_object: String,
    pub selection: PackageSelection,
    /// Names of the variables in the service's env file
    pub env_vars: Vec<String>,
    pub package: Invocation,
    pub upload: Invocation,
    pub deploy: Invocation,
}

impl DeploymentPlan {
    /// Command lines in execution order
    pub fn commands(&self) -> [&Invocation; 3] {
        [&self.package, &self.upload, &self.deploy]
    }
}
