//! External tools used by a deployment
//!
//! fnship does not talk to the cloud itself. It drives three command-line
//! tools and checks each one's exit status:
//! - an archive tool (`zip`) that bundles the service files flat
//! - an object-storage copier (`gsutil`) that uploads and removes archives
//! - the managed-function CLI (`gcloud`) that deploys from the uploaded archive
//!
//! The program names can be overridden through `FNSHIP_ZIP`, `FNSHIP_GSUTIL`
//! and `FNSHIP_GCLOUD`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub mod invocation;
pub mod runner;

pub use invocation::Invocation;
pub use runner::{CommandRunner, ProcessRunner};

use crate::config::ProjectConfig;
use crate::domain::DeploymentRequest;

/// Environment variable overriding the archive tool
pub const ENV_ZIP: &str = "FNSHIP_ZIP";

/// Environment variable overriding the object-storage tool
pub const ENV_GSUTIL: &str = "FNSHIP_GSUTIL";

/// Environment variable overriding the managed-function CLI
pub const ENV_GCLOUD: &str = "FNSHIP_GCLOUD";

/// Program names of the external tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub zip: String,
    pub gsutil: String,
    pub gcloud: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            zip: "zip".to_string(),
            gsutil: "gsutil".to_string(),
            gcloud: "gcloud".to_string(),
        }
    }
}

impl Toolchain {
    /// Default program names, overridden by non-empty environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |key: &str, default: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(default)
        };
        let defaults = Self::default();

        Self {
            zip: pick(ENV_ZIP, defaults.zip),
            gsutil: pick(ENV_GSUTIL, defaults.gsutil),
            gcloud: pick(ENV_GCLOUD, defaults.gcloud),
        }
    }

    /// `zip -j -q <archive> <files...>`: junk paths so the archive is flat
    pub fn package(&self, archive: &Path, files: &[PathBuf]) -> Invocation {
        Invocation::new(&self.zip)
            .args(["-j", "-q"])
            .arg(archive)
            .args(files)
    }

    /// `gsutil cp <archive> <remote>`
    pub fn upload(&self, archive: &Path, remote: &str) -> Invocation {
        Invocation::new(&self.gsutil)
            .arg("cp")
            .arg(archive)
            .arg(remote)
    }

    /// `gsutil rm <remote>`
    pub fn remove_remote(&self, remote: &str) -> Invocation {
        Invocation::new(&self.gsutil).arg("rm").arg(remote)
    }

    /// `gcloud functions deploy ...` with the request's fixed parameter set.
    ///
    /// The function is HTTP-triggered and requires authenticated callers, so
    /// `--allow-unauthenticated` is never passed.
    pub fn deploy(
        &self,
        request: &DeploymentRequest,
        config: &ProjectConfig,
        remote: &str,
    ) -> Invocation {
        let mut env_vars_file = OsString::from("--env-vars-file=");
        env_vars_file.push(request.env_file());

        Invocation::new(&self.gcloud)
            .args([
                "functions".to_string(),
                "deploy".to_string(),
                request.function_name.clone(),
                "--gen2".to_string(),
                format!("--runtime={}", request.runtime),
                format!("--region={}", config.region),
                format!("--source={}", remote),
                format!("--entry-point={}", request.entry_point),
                "--trigger-http".to_string(),
                format!("--memory={}", request.memory),
                format!("--timeout={}", request.timeout),
                format!("--min-instances={}", request.min_instances),
                format!("--max-instances={}", request.max_instances),
            ])
            .arg(env_vars_file)
            .arg(format!("--project={}", config.project_id))
    }
}
