//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use tailrisk_analytics::distribution::{Histogram, RiskMarkers};

use crate::cli::OutputFormat;

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints one compact JSON line per item.
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Formats a per-unit figure (a return, VaR or ES) to four decimals.
pub fn format_fraction(value: f64) -> String {
    format!("{:.4}", value)
}

/// Formats a monetary figure with two decimals and thousands separators.
pub fn format_amount(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac}")
}

/// Formats a fraction as a percentage with two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Renders a histogram as horizontal bars, tagging the bins that hold a
/// marker.
pub fn render_histogram(histogram: &Histogram, markers: &RiskMarkers) -> Vec<String> {
    let max = histogram.max_count().max(1);
    let tags = [
        (markers.var, "VaR"),
        (markers.expected_shortfall, "ES"),
        (markers.expected_return, "Mean"),
    ];

    histogram
        .bins
        .iter()
        .enumerate()
        .map(|(i, bin)| {
            let len = (bin.count * BAR_WIDTH).div_ceil(max);
            let labels: Vec<&str> = tags
                .iter()
                .filter(|(pos, _)| pos.and_then(|p| histogram.bin_index(p)) == Some(i))
                .map(|(_, label)| *label)
                .collect();
            let suffix = if labels.is_empty() {
                String::new()
            } else {
                format!("  <- {}", labels.join(", "))
            };
            format!(
                "{:>10} .. {:<10} {:>5} {}{}",
                format_fraction(bin.lower),
                format_fraction(bin.upper),
                bin.count,
                "█".repeat(len),
                suffix
            )
        })
        .collect()
}

/// Prints a histogram with its markers.
pub fn print_histogram(title: &str, histogram: &Histogram, markers: &RiskMarkers) {
    print_header(title);
    if histogram.is_empty() {
        println!("No results.");
        return;
    }
    for line in render_histogram(histogram, markers) {
        println!("{}", line);
    }
}
