//! Configuration loading and types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tfinv_inventory::SshConfig;
use tfinv_state::client::DEFAULT_COMMANDS;

/// Top-level configuration for tfinv
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provisioning project directory the commands run in
    #[serde(default = "default_terraform_dir")]
    pub terraform_dir: PathBuf,
    /// Candidate provisioner commands, tried in order
    #[serde(default = "default_commands")]
    pub commands: Vec<String>,
    /// SSH connection settings baked into hostvars
    #[serde(default)]
    pub ssh: SshSettings,
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terraform_dir: default_terraform_dir(),
            commands: default_commands(),
            ssh: SshSettings::default(),
            log_level: default_log_level(),
        }
    }
}

/// SSH settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshSettings {
    /// SSH username
    #[serde(default = "default_ssh_user")]
    pub user: String,
    /// Path to the SSH private key
    #[serde(default = "default_ssh_key")]
    pub private_key_file: String,
}

impl Default for SshSettings {
    fn default() -> Self {
        Self {
            user: default_ssh_user(),
            private_key_file: default_ssh_key(),
        }
    }
}

impl From<SshSettings> for SshConfig {
    fn from(settings: SshSettings) -> Self {
        Self {
            user: settings.user,
            private_key_file: settings.private_key_file,
        }
    }
}

fn default_terraform_dir() -> PathBuf {
    PathBuf::from("../terraform")
}

fn default_commands() -> Vec<String> {
    DEFAULT_COMMANDS.iter().map(|c| (*c).to_string()).collect()
}

fn default_ssh_user() -> String {
    "fatihgumush".to_string()
}

fn default_ssh_key() -> String {
    "~/.ssh/gcp_javdes".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &PathBuf) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from default paths or use defaults
    pub fn load_default() -> eyre::Result<Self> {
        // Check environment variable
        if let Ok(path) = std::env::var("TFINV_CONFIG") {
            return Self::load(&PathBuf::from(path));
        }

        // Try common paths
        let paths = [
            PathBuf::from("tfinv.toml"),
            PathBuf::from("/etc/tfinv/tfinv.toml"),
            dirs::config_dir()
                .map(|p| p.join("tfinv/tfinv.toml"))
                .unwrap_or_default(),
        ];

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        Ok(Config::default())
    }
}
