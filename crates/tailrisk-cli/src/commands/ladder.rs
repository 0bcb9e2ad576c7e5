//! Ladder command implementation.
//!
//! VaR and ES at every whole-percent confidence level from 90% to 99%.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tailrisk_analytics::risk::{confidence_ladder, standard_ladder_levels, LadderRung};
use tailrisk_core::InvestmentAmount;

use crate::cli::OutputFormat;
use crate::commands::{windowed_returns, Context, SourceArgs, WindowArgs};
use crate::config::amount_from_value;
use crate::output::{format_amount, format_fraction, print_header, print_output, print_warning};

/// Arguments for the ladder command.
#[derive(Args, Debug)]
pub struct LadderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Investment amount (at least 100)
    #[arg(short, long)]
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize, Tabled)]
struct LadderRow {
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Tail obs")]
    tail: String,
    #[tabled(rename = "VaR")]
    var: String,
    #[tabled(rename = "ES")]
    es: String,
    #[tabled(rename = "VaR (amount)")]
    scaled_var: String,
    #[tabled(rename = "ES (amount)")]
    scaled_es: String,
}

impl LadderRow {
    fn new(rung: &LadderRung, amount: InvestmentAmount) -> Self {
        let na = || "n/a".to_string();
        match rung.estimate.estimated() {
            Some(risk) => {
                let scaled = risk.scaled(amount);
                Self {
                    confidence: rung.confidence.to_string(),
                    tail: risk.tail_index.to_string(),
                    var: format_fraction(risk.var),
                    es: format_fraction(risk.expected_shortfall),
                    scaled_var: format_amount(scaled.var),
                    scaled_es: format_amount(scaled.expected_shortfall),
                }
            }
            None => Self {
                confidence: rung.confidence.to_string(),
                tail: "0".to_string(),
                var: na(),
                es: na(),
                scaled_var: na(),
                scaled_es: na(),
            },
        }
    }
}

/// Execute the ladder command.
pub async fn execute(args: LadderArgs, ctx: &Context) -> Result<()> {
    let amount = amount_from_value(args.amount.unwrap_or(ctx.config.defaults.amount))?;
    let window = args.window.resolve()?;
    let prices = args.source.load(&ctx.config).await?;
    let returns = windowed_returns(&prices, &window);

    let ladder = confidence_ladder(&returns.values(), &standard_ladder_levels());
    if returns.is_empty() {
        print_warning("No return data available for the selected asset and time range.");
    } else if ladder.iter().any(|r| !r.estimate.is_estimated()) {
        print_warning("Some confidence levels lack enough returns for VaR and ES.");
    }

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ladder)?);
        }
        _ => {
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header(&format!(
                    "Confidence Ladder: {} ({} returns, amount {})",
                    prices.label,
                    returns.len(),
                    format_amount(amount.value())
                ));
            }
            let rows: Vec<LadderRow> = ladder.iter().map(|r| LadderRow::new(r, amount)).collect();
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}
