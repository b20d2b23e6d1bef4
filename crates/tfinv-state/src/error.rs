//! Error types for tfinv-state

use thiserror::Error;

/// Errors that can occur while querying provisioner state
#[derive(Error, Debug, Clone)]
pub enum StateError {
    /// Command binary is not installed on this system
    #[error("command '{0}' not found")]
    CommandNotFound(String),

    /// Every candidate command was missing or failed
    #[error("neither 'tofu' nor 'terraform' command found or working")]
    NoCommandAvailable,

    /// Required output variable missing from state
    #[error("output variable '{0}' missing from provisioner state")]
    MissingOutput(String),

    /// Failed to parse `output -json` document
    #[error("failed to parse provisioner output: {0}")]
    Parse(String),

    /// Process spawn error
    #[error("failed to spawn process: {0}")]
    SpawnError(String),

    /// I/O error during execution
    #[error("I/O error: {0}")]
    IoError(String),
}
