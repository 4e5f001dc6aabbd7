//! Config command for inspecting CLI configuration

use clap::{Args, Subcommand};

use crate::config::{default_config_path, Config};
use crate::Cli;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Get a config value
    Get {
        /// Config key name
        key: String,
    },
    /// Print the effective configuration
    Show,
    /// Show config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(default_config_path);

    match &args.command {
        ConfigCommands::Get { key } => match config.get(key) {
            Some(value) => println!("{}", value),
            None => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                Config::keys().join(", ")
            ),
        },
        ConfigCommands::Show => print!("{}", config.to_toml()?),
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Config::default().save(&path)?;
            if !cli.quiet {
                println!("Created config file at {}", path.display());
            }
        }
    }
    Ok(())
}
