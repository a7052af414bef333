//! Archive artifact for one deployment
//!
//! The archive is created in the working directory as `<function>.zip`,
//! uploaded, and removed again when the [`ArchiveArtifact`] is dropped,
//! whether the run ends in success, an error, or a panic.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, fs::io_error, tool::packaging_failed};
use crate::service::PackageSelection;
use crate::tools::{CommandRunner, Toolchain};

/// A local archive owned by the current run
#[derive(Debug)]
pub struct ArchiveArtifact {
    path: PathBuf,
}

impl ArchiveArtifact {
    /// Build the archive at `path` from the selected files.
    ///
    /// A stale file at `path` is removed first so the archive tool never
    /// appends to a previous run's archive. If packaging fails, whatever the
    /// tool left behind is removed as well.
    pub fn build(
        path: &Path,
        selection: &PackageSelection,
        toolchain: &Toolchain,
        runner: &dyn CommandRunner,
    ) -> Result<Self> {
        let archive = path.display().to_string();
        if path.exists() {
            debug!(archive = %archive, "removing stale archive");
            std::fs::remove_file(path)
                .map_err(|e| io_error(format!("Failed to remove stale {}: {}", archive, e)))?;
        }

        // Owning the path from here on means a failed build still cleans up.
        let artifact = Self {
            path: path.to_path_buf(),
        };

        let invocation = toolchain.package(path, &selection.included);
        let status = runner.run(&invocation).map_err(|e| {
            packaging_failed(
                &archive,
                format!("could not start `{}`: {}", invocation.program(), e),
            )
        })?;
        if !status.success() {
            return Err(packaging_failed(
                &archive,
                format!("`{}` ended with {}", invocation.program(), status.describe()),
            ));
        }
        if !path.is_file() {
            return Err(packaging_failed(
                &archive,
                format!("`{}` did not create the archive", invocation.program()),
            ));
        }

        Ok(artifact)
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ArchiveArtifact {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(archive = %self.path.display(), "removed local archive"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(archive = %self.path.display(), error = %e, "failed to remove local archive"),
        }
    }
}
