//! Analyze command implementation.
//!
//! Computes VaR, ES and the expected return of a price series over a date
//! window, scaled to an investment amount.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tailrisk_analytics::report::{RiskReport, RiskReportBuilder};
use tailrisk_core::{DateWindow, PriceField};

use crate::cli::OutputFormat;
use crate::commands::{windowed_returns, Context, SourceArgs, WindowArgs};
use crate::config::{amount_from_value, confidence_from_percent};
use crate::error::CliError;
use crate::output::{
    format_amount, format_fraction, print_header, print_histogram, print_output, print_warning,
    KeyValue,
};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Confidence level in percent (90-99)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(90..=99))]
    pub confidence: Option<u8>,

    /// Investment amount (at least 100)
    #[arg(short, long)]
    pub amount: Option<f64>,

    /// Histogram bins
    #[arg(long)]
    pub bins: Option<usize>,

    /// Print the return distribution
    #[arg(long)]
    pub histogram: bool,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    source: &'a str,
    window: &'a DateWindow,
    reference_price: String,
    status: String,
    warning: Option<&'static str>,
    report: &'a RiskReport,
}

/// Execute the analyze command.
pub async fn execute(args: AnalyzeArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.config.defaults;
    let confidence = confidence_from_percent(args.confidence.unwrap_or(defaults.confidence_percent))?;
    let amount = amount_from_value(args.amount.unwrap_or(defaults.amount))?;
    let bins = args.bins.unwrap_or(defaults.bins);
    if bins == 0 {
        return Err(CliError::InvalidArgument("--bins must be at least 1".into()).into());
    }
    let window = args.window.resolve()?;

    let prices = args.source.load(&ctx.config).await?;
    let returns = windowed_returns(&prices, &window);
    let report = RiskReportBuilder::new()
        .confidence(confidence)
        .amount(amount)
        .bins(bins)
        .build(&returns);

    if let Some(warning) = report.warning() {
        print_warning(warning);
    }

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("Tail Risk: {}", prices.label));
            }
            print_output(&summary_rows(&report, &window, prices.reference_field()), ctx.format)?;

            if args.histogram {
                print_histogram("Return Distribution", &report.histogram, &report.markers);
                print_histogram(
                    &format!("Return Distribution (amount {})", format_amount(amount.value())),
                    &report.scaled_histogram,
                    &report.scaled_markers,
                );
            }
        }
        OutputFormat::Json => {
            let output = AnalyzeOutput {
                source: &prices.label,
                window: &window,
                reference_price: prices.reference_field().to_string(),
                status: report.status().to_string(),
                warning: report.warning(),
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            print_output(&summary_rows(&report, &window, prices.reference_field()), ctx.format)?;
        }
        OutputFormat::Minimal => match (report.estimate.estimated(), report.scaled) {
            (Some(risk), Some(scaled)) => println!(
                "VaR: {}, ES: {}, VaR ({}): {}, ES ({}): {}",
                format_fraction(risk.var),
                format_fraction(risk.expected_shortfall),
                format_amount(amount.value()),
                format_amount(scaled.var),
                format_amount(amount.value()),
                format_amount(scaled.expected_shortfall)
            ),
            _ => println!("{}", report.status()),
        },
    }

    Ok(())
}

fn optional_fraction(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), format_fraction)
}

fn optional_amount(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), format_amount)
}

fn summary_rows(report: &RiskReport, window: &DateWindow, field: PriceField) -> Vec<KeyValue> {
    let amount = format_amount(report.amount.value());
    let span = match (report.first_date, report.last_date) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "n/a".to_string(),
    };

    vec![
        KeyValue::new("Window", window.to_string()),
        KeyValue::new("Returns span", span),
        KeyValue::new("Reference price", field.to_string()),
        KeyValue::new("Observations", report.observations.to_string()),
        KeyValue::new("Confidence", report.confidence.to_string()),
        KeyValue::new("Investment amount", amount.clone()),
        KeyValue::new("Expected return", optional_fraction(report.expected_return)),
        KeyValue::new("VaR", optional_fraction(report.estimate.var())),
        KeyValue::new("ES", optional_fraction(report.estimate.expected_shortfall())),
        KeyValue::new(
            format!("Expected return ({amount})"),
            optional_amount(report.scaled_expected_return),
        ),
        KeyValue::new(
            format!("VaR ({amount})"),
            optional_amount(report.scaled.map(|s| s.var)),
        ),
        KeyValue::new(
            format!("ES ({amount})"),
            optional_amount(report.scaled.map(|s| s.expected_shortfall)),
        ),
    ]
}
