//! Deployment request domain type
//!
//! A request is built once per invocation from the command line and the
//! fixed deployment settings, validated, and then only read.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{FnshipError, Result};

/// Runtime identifier passed to the deploy command
pub const DEFAULT_RUNTIME: &str = "python312";

/// Memory limit of a deployed instance
pub const DEFAULT_MEMORY: &str = "1Gi";

/// Request timeout of a deployed instance
pub const DEFAULT_TIMEOUT: &str = "540s";

/// Instances kept warm
pub const DEFAULT_MIN_INSTANCES: u32 = 0;

/// Upper bound on instances
pub const DEFAULT_MAX_INSTANCES: u32 = 1;

/// Name of the HTTP handler inside the service's `main.py`
pub const DEFAULT_ENTRY_POINT: &str = "functionRun";

/// Per-service environment file, relative to the service directory
pub const ENV_FILE_NAME: &str = "local_env.yaml";

const MAX_FUNCTION_NAME_LEN: usize = 63;

const MEMORY_UNITS: &[&str] = &["k", "Ki", "M", "Mi", "G", "Gi", "T", "Ti", "MB", "GB"];

/// Everything needed to deploy one service directory as one function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRequest {
    pub service_dir: PathBuf,
    pub function_name: String,
    pub runtime: String,
    pub memory: String,
    pub timeout: String,
    pub min_instances: u32,
    pub max_instances: u32,
    pub entry_point: String,
}

impl DeploymentRequest {
    /// Create a request with the default deployment settings
    pub fn new(service_dir: impl Into<PathBuf>, function_name: impl Into<String>) -> Self {
        Self {
            service_dir: service_dir.into(),
            function_name: function_name.into(),
            runtime: DEFAULT_RUNTIME.to_string(),
            memory: DEFAULT_MEMORY.to_string(),
            timeout: DEFAULT_TIMEOUT.to_string(),
            min_instances: DEFAULT_MIN_INSTANCES,
            max_instances: DEFAULT_MAX_INSTANCES,
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = memory.into();
        self
    }

    pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = timeout.into();
        self
    }

    pub fn with_instances(mut self, min: u32, max: u32) -> Self {
        self.min_instances = min;
        self.max_instances = max;
        self
    }

    /// File name of the archive built for this request (`<name>.zip`)
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.function_name)
    }

    /// Environment file handed to the deploy command
    pub fn env_file(&self) -> PathBuf {
        self.service_dir.join(ENV_FILE_NAME)
    }

    /// Check the function name and the resource settings
    pub fn validate(&self) -> Result<()> {
        validate_function_name(&self.function_name)?;

        if self.runtime.trim().is_empty() {
            return Err(invalid("runtime cannot be empty"));
        }
        if !is_memory_quantity(&self.memory) {
            return Err(invalid(format!(
                "memory '{}' must be a number followed by one of {}",
                self.memory,
                MEMORY_UNITS.join(", ")
            )));
        }
        if !is_duration_seconds(&self.timeout) {
            return Err(invalid(format!(
                "timeout '{}' must be a number of seconds such as 540s",
                self.timeout
            )));
        }
        if self.min_instances > self.max_instances {
            return Err(invalid(format!(
                "min instances ({}) exceeds max instances ({})",
                self.min_instances, self.max_instances
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> FnshipError {
    FnshipError::InvalidRequest {
        message: message.into(),
    }
}

/// Validate a managed-function name
pub fn validate_function_name(name: &str) -> Result<()> {
    let reject = |reason: &str| {
        Err(FnshipError::InvalidFunctionName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    let Some(first) = name.chars().next() else {
        return reject("name cannot be empty");
    };
    if !first.is_ascii_lowercase() {
        return reject("name must start with a lowercase letter");
    }
    if name.len() > MAX_FUNCTION_NAME_LEN {
        return reject("name is longer than 63 characters");
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '-' && *c != '_')
    {
        return Err(FnshipError::InvalidFunctionName {
            name: name.to_string(),
            reason: format!("name contains invalid character '{}'", bad),
        });
    }
    if name.ends_with(['-', '_']) {
        return reject("name must end with a letter or digit");
    }

    Ok(())
}

fn is_memory_quantity(value: &str) -> bool {
    MEMORY_UNITS.iter().any(|unit| {
        value
            .strip_suffix(unit)
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
    })
}

fn is_duration_seconds(value: &str) -> bool {
    value
        .strip_suffix('s')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}
