//! Local command execution using `tokio::process`

use std::path::Path;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::StateError;
use crate::result::CommandResult;

/// Runs a program and captures its output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `dir`, capturing stdout and stderr.
    ///
    /// A non-zero exit is not an error at this layer; it is reported in
    /// the returned [`CommandResult`]. Errors mean the process could not
    /// be started or its output could not be collected.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        dir: &Path,
    ) -> Result<CommandResult, StateError>;
}

/// Local command runner
///
/// Executes programs on the local machine using `tokio::process::Command`.
/// No shell is involved; the program is spawned directly with its working
/// directory set to the provisioning project.
#[derive(Debug, Clone, Default)]
pub struct LocalRunner;

impl LocalRunner {
    /// Create a new local runner
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for LocalRunner {
    #[instrument(skip(self), level = "debug")]
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        dir: &Path,
    ) -> Result<CommandResult, StateError> {
        let start = Instant::now();

        debug!(program = %program, dir = %dir.display(), "executing command");

        let child = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    StateError::CommandNotFound(program.to_string())
                } else {
                    StateError::SpawnError(e.to_string())
                }
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| StateError::IoError(e.to_string()))?;

        let duration = start.elapsed();
        let status = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        debug!(
            program = %program,
            status = status,
            duration = ?duration,
            "command completed"
        );

        Ok(CommandResult {
            status,
            stdout,
            stderr,
            duration,
        })
    }
}
