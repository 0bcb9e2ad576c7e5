//! Returns command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tailrisk_analytics::risk::expected_return;

use crate::cli::OutputFormat;
use crate::commands::{windowed_returns, Context, SourceArgs, WindowArgs};
use crate::output::{format_fraction, format_percent, print_header, print_info, print_output, print_warning};

/// Arguments for the returns command.
#[derive(Args, Debug)]
pub struct ReturnsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct ReturnRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Return")]
    #[serde(rename = "return")]
    value: String,
    #[tabled(rename = "Return %")]
    #[serde(skip)]
    percent: String,
}

/// Execute the returns command.
pub async fn execute(args: ReturnsArgs, ctx: &Context) -> Result<()> {
    let window = args.window.resolve()?;
    let prices = args.source.load(&ctx.config).await?;
    let returns = windowed_returns(&prices, &window);

    if returns.is_empty() {
        print_warning("No return data available for the selected asset and time range.");
    }

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&returns)?);
        }
        OutputFormat::Minimal => {
            for r in &returns {
                println!("{}", r.value);
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows: Vec<ReturnRow> = returns
                .iter()
                .map(|r| ReturnRow {
                    date: r.date.to_string(),
                    value: format!("{:.6}", r.value),
                    percent: format_percent(r.value),
                })
                .collect();

            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header(&format!(
                    "Returns: {} ({}, {})",
                    prices.label,
                    prices.reference_field(),
                    window
                ));
            }
            print_output(&rows, ctx.format)?;

            if ctx.format == OutputFormat::Table && !ctx.quiet {
                if let Some(mean) = expected_return(&returns) {
                    print_info(&format!(
                        "{} returns, mean {}",
                        returns.len(),
                        format_fraction(mean)
                    ));
                }
            }
        }
    }

    Ok(())
}
