//! tfinv-state: provisioner state access
//!
//! Runs `tofu`/`terraform` `output -json` in the provisioning project
//! directory and parses the result into typed output variables.

pub mod client;
pub mod error;
pub mod outputs;
pub mod result;
pub mod runner;

pub use client::StateClient;
pub use error::StateError;
pub use outputs::StateOutputs;
pub use result::CommandResult;
pub use runner::{CommandRunner, LocalRunner};
