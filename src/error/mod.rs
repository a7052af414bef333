//! Error types and handling for fnship
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Project configuration errors
//! - [`fs`]: File system and service directory errors
//! - [`tool`]: External tool (archive, upload, deploy) errors

pub mod config;
pub mod fs;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fnship operations
#[derive(Error, Diagnostic, Debug)]
pub enum FnshipError {
    // Usage errors
    #[error("Usage: {program} <SERVICE_DIR> <FUNCTION_NAME>")]
    #[diagnostic(
        code(fnship::usage::missing_argument),
        help("Pass the service directory and the function name, e.g. `fnship ./svc myfunc`")
    )]
    Usage { program: String },

    #[error("Invalid function name '{name}': {reason}")]
    #[diagnostic(
        code(fnship::request::invalid_name),
        help(
            "Function names start with a lowercase letter, contain only lowercase letters, digits, '-' and '_', and end with a letter or digit (max 63 characters)"
        )
    )]
    InvalidFunctionName { name: String, reason: String },

    #[error("Invalid deployment request: {message}")]
    #[diagnostic(code(fnship::request::invalid))]
    InvalidRequest { message: String },

    // Service directory errors
    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(fnship::fs::directory_not_found),
        help("The first argument must be an existing service directory")
    )]
    DirectoryNotFound { path: String },

    #[error("Environment file not found: {path}")]
    #[diagnostic(
        code(fnship::service::env_file_missing),
        help("Every service directory needs a local_env.yaml; run `fnship init` for a template")
    )]
    EnvFileMissing { path: String },

    #[error("Invalid environment file {path}: {reason}")]
    #[diagnostic(
        code(fnship::service::env_file_invalid),
        help("local_env.yaml must be a flat mapping of variable names to scalar values")
    )]
    EnvFileInvalid { path: String, reason: String },

    #[error("Nothing to package in {path}")]
    #[diagnostic(
        code(fnship::service::empty),
        help("Only top-level files are packaged; files starting with 'local_' are left out")
    )]
    NothingToPackage { path: String },

    #[error("Refusing to scaffold into non-empty directory: {path}")]
    #[diagnostic(code(fnship::scaffold::not_empty))]
    ScaffoldTargetNotEmpty { path: String },

    #[error("Invalid entry point '{name}'")]
    #[diagnostic(
        code(fnship::scaffold::invalid_entry_point),
        help("The entry point must be a valid Python identifier")
    )]
    InvalidEntryPoint { name: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(fnship::config::not_found),
        help("Create it with PROJECT_ID=, REGION= and GCS_PATH= lines, or pass --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(fnship::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Invalid configuration in {path}: {message}")]
    #[diagnostic(code(fnship::config::invalid))]
    ConfigInvalid { path: String, message: String },

    // External tool errors
    #[error("Packaging {archive} failed: {reason}")]
    #[diagnostic(
        code(fnship::tool::packaging_failed),
        help("Check that `zip` is installed or point FNSHIP_ZIP at it")
    )]
    PackagingFailed { archive: String, reason: String },

    #[error("Upload of {archive} to {remote} failed: {reason}")]
    #[diagnostic(
        code(fnship::tool::upload_failed),
        help("Check your gsutil credentials and the GCS_PATH bucket")
    )]
    UploadFailed {
        archive: String,
        remote: String,
        reason: String,
    },

    #[error("Deployment of '{function}' failed: {reason} (uploaded archive left at {remote})")]
    #[diagnostic(
        code(fnship::tool::deploy_failed),
        help("Re-run with --cleanup-remote-on-failure to remove the uploaded archive")
    )]
    DeployFailed {
        function: String,
        remote: String,
        reason: String,
    },

    #[error("Deployment of '{function}' failed: {reason} (uploaded archive {remote} was removed)")]
    #[diagnostic(
        code(fnship::tool::deploy_failed_remote_removed),
        help("Fix the deploy error and run again; the archive is uploaded anew")
    )]
    DeployFailedRemoteRemoved {
        function: String,
        remote: String,
        reason: String,
    },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(fnship::completions::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fnship::fs::io_error))]
    IoError { message: String },
}

impl FnshipError {
    /// Process exit code for this error.
    ///
    /// Validation failures share code 1; every external step that can fail
    /// after side effects started gets its own code so callers can tell
    /// "uploaded but not deployed" apart from "nothing happened".
    pub fn exit_code(&self) -> i32 {
        match self {
            FnshipError::PackagingFailed { .. } => 3,
            FnshipError::UploadFailed { .. } => 4,
            FnshipError::DeployFailed { .. } | FnshipError::DeployFailedRemoteRemoved { .. } => 5,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for FnshipError {
    fn from(err: std::io::Error) -> Self {
        FnshipError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FnshipError {
    fn from(err: serde_json::Error) -> Self {
        FnshipError::IoError {
            message: format!("Failed to render JSON: {}", err),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FnshipError>;
