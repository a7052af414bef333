//! Running external commands

use std::process::{Command, Stdio};

use tracing::debug;

use super::Invocation;

/// How an external command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Short human description for error messages
    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

impl From<std::process::ExitStatus> for ToolStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Executes invocations. The seam between the deploy pipeline and the
/// operating system.
pub trait CommandRunner {
    /// Run to completion; `Err` only when the program could not be started
    fn run(&self, invocation: &Invocation) -> std::io::Result<ToolStatus>;
}

/// Spawns real processes that share the terminal with fnship
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<ToolStatus> {
        debug!(command = %invocation, "spawning");
        let status = Command::new(invocation.program())
            .args(invocation.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        debug!(command = %invocation.program(), code = ?status.code(), "finished");
        Ok(status.into())
    }
}
