//! Common test utilities for fnship integration tests
//!
//! Each [`TestWorkspace`] owns a temp directory with a `bin/` of fake
//! `zip`, `gsutil` and `gcloud` scripts. The fakes append their argv to
//! `tools.log`, so tests can assert which external steps ran, and
//! `gsutil cp` copies into a local `bucket/` directory that stands in for
//! cloud storage.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Log file the fake tools append to, relative to the workspace
pub const TOOL_LOG: &str = "tools.log";

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

const FAKE_ZIP: &str = r#"#!/bin/sh
echo "zip $*" >> "$FNSHIP_TEST_LOG"
shift 2
archive="$1"
shift
: > "$archive"
for f in "$@"; do
  basename "$f" >> "$archive"
done
"#;

const FAKE_GSUTIL: &str = r#"#!/bin/sh
echo "gsutil $*" >> "$FNSHIP_TEST_LOG"
if [ -n "$FAKE_GSUTIL_EXIT" ]; then
  exit "$FAKE_GSUTIL_EXIT"
fi
case "$1" in
  cp) cp "$2" "$3" ;;
  rm) rm -f "$2" ;;
esac
"#;

const FAKE_GCLOUD: &str = r#"#!/bin/sh
echo "gcloud $*" >> "$FNSHIP_TEST_LOG"
exit "${FAKE_GCLOUD_EXIT:-0}"
"#;

impl TestWorkspace {
    /// Create a new test workspace with fake tools installed
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let workspace = Self { temp, path };

        workspace.install_tool("zip", FAKE_ZIP);
        workspace.install_tool("gsutil", FAKE_GSUTIL);
        workspace.install_tool("gcloud", FAKE_GCLOUD);
        std::fs::create_dir_all(workspace.bucket()).expect("Failed to create bucket directory");

        workspace
    }

    fn install_tool(&self, name: &str, script: &str) {
        let tool = self.bin().join(name);
        self.write_file(&format!("bin/{}", name), script);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make fake tool executable");
        }
    }

    pub fn bin(&self) -> PathBuf {
        self.path.join("bin")
    }

    /// Local directory that plays the storage bucket
    pub fn bucket(&self) -> PathBuf {
        self.path.join("bucket")
    }

    /// Write `.env` with GCS_PATH pointing at [`Self::bucket`]
    pub fn write_config(&self) {
        self.write_file(
            ".env",
            &format!(
                "PROJECT_ID=analytics-prod\nREGION=us-south1\nGCS_PATH={}\n",
                self.bucket().display()
            ),
        );
    }

    /// Create a deployable service directory with local-only files
    pub fn create_service(&self, dir: &str) -> PathBuf {
        self.write_file(
            &format!("{}/main.py", dir),
            "def functionRun(request):\n    return 'ok'\n",
        );
        self.write_file(&format!("{}/requirements.txt", dir), "flask\n");
        self.write_file(
            &format!("{}/local_main.py", dir),
            "from main import functionRun\n",
        );
        self.write_file(
            &format!("{}/local_env.yaml", dir),
            "API_KEY: \"s3cr3t-value\"\nTIMEOUT_S: 30\n",
        );
        self.path.join(dir)
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Lines the fake tools logged, empty if none ran
    pub fn tool_calls(&self) -> Vec<String> {
        let log = self.path.join(TOOL_LOG);
        std::fs::read_to_string(log)
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `fnship` command running in this workspace with the fake tools
    #[allow(deprecated)]
    pub fn fnship_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fnship").expect("fnship binary not built");
        cmd.current_dir(&self.path);
        cmd.env_remove("FNSHIP_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("FAKE_GSUTIL_EXIT");
        cmd.env_remove("FAKE_GCLOUD_EXIT");
        cmd.env("FNSHIP_ZIP", tool_path(&self.bin(), "zip"));
        cmd.env("FNSHIP_GSUTIL", tool_path(&self.bin(), "gsutil"));
        cmd.env("FNSHIP_GCLOUD", tool_path(&self.bin(), "gcloud"));
        cmd.env("FNSHIP_TEST_LOG", self.path.join(TOOL_LOG));
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn tool_path(bin: &Path, name: &str) -> PathBuf {
    bin.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
        assert!(workspace.file_exists("bin/zip"));
        assert!(workspace.bucket().is_dir());
    }

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_workspace_no_tool_calls_initially() {
        let workspace = TestWorkspace::new();
        assert!(workspace.tool_calls().is_empty());
    }
}
