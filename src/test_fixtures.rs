//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helpers to create service directories and a
//! recording [`CommandRunner`] that stands in for `zip`, `gsutil` and
//! `gcloud`.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_service_dir, RecordingRunner};
//!
//! #[test]
//! fn my_test() {
//!     let (_temp, svc) = create_service_dir(&[("main.py", ""), ("local_env.yaml", "A: b\n")]);
//!     let runner = RecordingRunner::new().failing("gcloud");
//! }
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::ProjectConfig;
use crate::tools::runner::ToolStatus;
use crate::tools::{CommandRunner, Invocation};

/// Create `<temp>/svc` populated with `(relative path, content)` files.
///
/// Returns the temp directory guard (keep it alive) and the service path.
pub fn create_service_dir(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let root = temp.path().join("svc");
    std::fs::create_dir_all(&root).expect("Failed to create service directory");

    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    (temp, root)
}

/// Project configuration pointing at a made-up bucket
pub fn sample_config() -> ProjectConfig {
    ProjectConfig {
        project_id: "analytics-prod".to_string(),
        region: "us-south1".to_string(),
        storage_path: "gs://deploy-bucket/functions".to_string(),
    }
}

/// Records every invocation instead of spawning it.
///
/// `zip` invocations write the junked file names of their inputs, one per
/// line, to the archive path so tests can inspect what was packaged.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    failing: Vec<String>,
    missing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with status 1. `"gsutil rm"` style entries match
    /// the program together with its first argument.
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// Make `program` fail to start
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|inv| inv.program().to_string())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<ToolStatus> {
        self.calls.borrow_mut().push(invocation.clone());
        let program = invocation.program();

        if self.missing.iter().any(|p| p == program) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            ));
        }

        if program == "zip" {
            if let [_, _, archive, files @ ..] = invocation.arguments() {
                let listing: String = files
                    .iter()
                    .filter_map(|f| Path::new(f).file_name())
                    .map(|name| format!("{}\n", name.to_string_lossy()))
                    .collect();
                std::fs::write(archive, listing)?;
            }
        }

        let with_subcommand = invocation
            .arguments()
            .first()
            .map(|first| format!("{} {}", program, first.to_string_lossy()));
        let failing = self
            .failing
            .iter()
            .any(|p| p == program || Some(p) == with_subcommand.as_ref());

        Ok(ToolStatus {
            code: Some(if failing { 1 } else { 0 }),
        })
    }
}
