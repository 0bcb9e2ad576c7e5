//! Tailrisk CLI - Historical Value-at-Risk and Expected Shortfall.
//!
//! # Usage
//!
//! ```bash
//! # VaR / ES of a CSV price file over the last year at 95%
//! tailrisk analyze --file prices.csv
//!
//! # An example dataset at 99% for an amount of 10,000
//! tailrisk analyze --dataset MSFT_week --data-dir data --confidence 99 --amount 10000
//!
//! # Alpha Vantage, with the distribution
//! tailrisk analyze --symbol IBM --interval monthly --api-key KEY --histogram
//!
//! # Example datasets available under ./data
//! tailrisk datasets --data-dir data
//!
//! # Every confidence level from 90% to 99%
//! tailrisk ladder --file prices.csv --start 2024-01-01 --end 2024-12-31
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::AppConfig;

fn init_logging(quiet: bool) {
    let default = if quiet { "error" } else { "warn,tailrisk=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let format = cli.format;
    let config_path = cli.config.as_deref();

    // Execute command
    match cli.command {
        Commands::Config(args) => commands::config::execute(args, config_path, format)?,
        command => {
            let ctx = Context {
                format,
                quiet: cli.quiet,
                config: AppConfig::load(config_path)?,
            };
            match command {
                Commands::Analyze(args) => commands::analyze::execute(args, &ctx).await?,
                Commands::Returns(args) => commands::returns::execute(args, &ctx).await?,
                Commands::Ladder(args) => commands::ladder::execute(args, &ctx).await?,
                Commands::Datasets(args) => commands::datasets::execute(args, &ctx)?,
                Commands::Config(_) => unreachable!("handled above"),
            }
        }
    }

    Ok(())
}
