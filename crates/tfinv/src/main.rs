//! tfinv: Terraform/OpenTofu to Ansible dynamic inventory bridge
//!
//! Reads provisioner output state via `tofu`/`terraform output -json` and
//! prints a Kubespray-shaped dynamic inventory document on stdout.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tfinv_inventory::build_inventory;
use tfinv_state::{LocalRunner, StateClient, StateError};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "tfinv")]
#[command(about = "Generate an Ansible dynamic inventory from provisioner state", long_about = None)]
struct Cli {
    /// Path to a TOML config file (overrides the default search)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Provisioning project directory
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Provisioner command candidate, may repeat (default: tofu, terraform)
    #[arg(long = "command")]
    commands: Vec<String>,

    /// SSH username written into hostvars
    #[arg(long)]
    ssh_user: Option<String>,

    /// SSH private key path written into hostvars
    #[arg(long)]
    ssh_key: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    fn merge_into(self, mut config: Config) -> Config {
        if let Some(dir) = self.dir {
            config.terraform_dir = dir;
        }
        if !self.commands.is_empty() {
            config.commands = self.commands;
        }
        if let Some(user) = self.ssh_user {
            config.ssh.user = user;
        }
        if let Some(key) = self.ssh_key {
            config.ssh.private_key_file = key;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let config = cli.merge_into(config);

    // stdout carries exactly the inventory document; everything else
    // goes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = StateClient::new(Arc::new(LocalRunner::new()), config.terraform_dir.clone())
        .with_commands(config.commands.clone());

    let outputs = match client.fetch_outputs().await {
        Ok(outputs) => outputs,
        Err(e @ StateError::NoCommandAvailable) => {
            error!("{e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let inventory = build_inventory(&outputs, &config.ssh.into());
    println!("{}", inventory.to_json_pretty()?);

    Ok(())
}
