//! Candidate-command fallback over the provisioner CLI

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::error::StateError;
use crate::outputs::StateOutputs;
use crate::runner::CommandRunner;

/// Default candidate commands, tried in order
pub const DEFAULT_COMMANDS: [&str; 2] = ["tofu", "terraform"];

/// Client for reading provisioner output state
///
/// Tries each candidate command in order with `output -json` until one
/// both exists and exits 0. A candidate that is missing or fails is
/// logged and skipped; only exhausting the whole list is an error.
pub struct StateClient {
    /// Runner for spawning the provisioner CLI
    runner: Arc<dyn CommandRunner>,
    /// Provisioning project directory (working directory for the CLI)
    dir: PathBuf,
    /// Candidate command names, tried in order
    commands: Vec<String>,
}

impl StateClient {
    /// Create a client with the default `tofu`/`terraform` candidates
    pub fn new(runner: Arc<dyn CommandRunner>, dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            dir: dir.into(),
            commands: DEFAULT_COMMANDS.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Override the candidate command list
    #[must_use]
    pub fn with_commands(mut self, commands: Vec<String>) -> Self {
        self.commands = commands;
        self
    }

    /// Fetch and parse the provisioner's output variables.
    ///
    /// # Errors
    /// Returns [`StateError::NoCommandAvailable`] when every candidate is
    /// missing or exits non-zero. A candidate that succeeds but prints an
    /// incomplete or malformed document fails immediately with the parse
    /// error; the remaining candidates would print the same state.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn fetch_outputs(&self) -> Result<StateOutputs, StateError> {
        for command in &self.commands {
            match self.runner.run(command, &["output", "-json"], &self.dir).await {
                Ok(result) if result.success() => {
                    debug!(command = %command, "provisioner output read");
                    return StateOutputs::from_json(&result.stdout);
                }
                Ok(result) => {
                    warn!(
                        command = %command,
                        status = result.status,
                        stderr = %result.stderr,
                        "command failed"
                    );
                }
                Err(StateError::CommandNotFound(name)) => {
                    warn!(command = %name, "command not found");
                }
                Err(e) => return Err(e),
            }
        }

        Err(StateError::NoCommandAvailable)
    }
}
