//! Config command implementation.
//!
//! Shows, locates and initialises the TOML configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::{default_config_path, AppConfig};
use crate::output::{print_header, print_info, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with the default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(explicit, format),
        ConfigCommand::Path => execute_path(explicit, format),
        ConfigCommand::Init(init) => execute_init(explicit, init),
    }
}

fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Show the effective configuration.
fn execute_show(explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    let mut config = AppConfig::load(explicit)?;
    if !config.alphavantage.api_key.is_empty() {
        config.alphavantage.api_key = "***".into();
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Minimal => {
            print!("{}", config.to_toml()?);
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let av = &config.alphavantage;
            let rows = vec![
                KeyValue::new(
                    "defaults.confidence_percent",
                    config.defaults.confidence_percent.to_string(),
                ),
                KeyValue::new("defaults.amount", config.defaults.amount.to_string()),
                KeyValue::new("defaults.bins", config.defaults.bins.to_string()),
                KeyValue::new("defaults.interval", config.defaults.interval.to_string()),
                KeyValue::new(
                    "data.data_dir",
                    config
                        .data
                        .data_dir
                        .as_ref()
                        .map_or_else(|| "(unset)".to_string(), |p| p.display().to_string()),
                ),
                KeyValue::new("alphavantage.base_url", av.base_url.clone()),
                KeyValue::new(
                    "alphavantage.api_key",
                    if av.api_key.is_empty() { "(unset)" } else { av.api_key.as_str() },
                ),
                KeyValue::new("alphavantage.timeout_secs", av.timeout_secs.to_string()),
                KeyValue::new(
                    "alphavantage.accept_invalid_certs",
                    av.accept_invalid_certs.to_string(),
                ),
                KeyValue::new("alphavantage.max_retries", av.max_retries.to_string()),
            ];
            if format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = config_path(explicit)?;
    if format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }

    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write the default configuration.
fn execute_init(explicit: Option<&Path>, args: InitArgs) -> Result<()> {
    let path = config_path(explicit)?;
    if path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, AppConfig::default().to_toml()?)?;

    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}
