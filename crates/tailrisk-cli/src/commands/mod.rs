//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod datasets;
pub mod ladder;
pub mod returns;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use config::ConfigArgs;
pub use datasets::DatasetsArgs;
pub use ladder::LadderArgs;
pub use returns::ReturnsArgs;

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use tailrisk_core::{Date, DateWindow, Interval, PriceField, PriceSeries, ReturnSeries};
use tailrisk_ext_alphavantage::AlphaVantageClient;
use tailrisk_ext_file::{create_csv_source, create_example_data, parse_dataset_name};
use tailrisk_traits::{PriceRequest, PriceSource};

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Dataset directory used when neither the flag nor the config names one.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub format: OutputFormat,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Loaded configuration
    pub config: AppConfig,
}

/// Where prices come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// CSV price file (date in the first column)
    #[arg(long, conflicts_with_all = ["dataset", "symbol"])]
    pub file: Option<PathBuf>,

    /// Example dataset name, e.g. MSFT_day
    #[arg(long, conflicts_with = "symbol")]
    pub dataset: Option<String>,

    /// Example dataset directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Asset symbol to fetch from Alpha Vantage
    #[arg(long)]
    pub symbol: Option<String>,

    /// Observation interval for --symbol: daily, weekly or monthly
    #[arg(long, value_parser = parse_interval)]
    pub interval: Option<Interval>,

    /// Alpha Vantage API key
    #[arg(long, env = "ALPHAVANTAGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Date range of the returns to use.
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// First return date (YYYY-MM-DD). Defaults to one year before --end.
    #[arg(long)]
    pub start: Option<String>,

    /// Last return date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub end: Option<String>,
}

/// Prices loaded for a command, with a label for display.
pub struct LoadedPrices {
    /// What was requested
    pub label: String,
    /// The series
    pub series: PriceSeries,
}

impl LoadedPrices {
    /// Column returns were computed from.
    pub fn reference_field(&self) -> PriceField {
        self.series.reference_field()
    }
}

/// Dataset directory: the flag, then the config file, then `./data`.
pub fn data_dir(flag: Option<&Path>, config: &AppConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.data.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

fn parse_interval(s: &str) -> Result<Interval, String> {
    s.parse::<Interval>().map_err(|e| e.to_string())
}

impl WindowArgs {
    /// Inclusive window, one year back from the end date by default.
    pub fn resolve(&self) -> CliResult<DateWindow> {
        let end = match &self.end {
            Some(s) => parse_date(s)?,
            None => Date::today(),
        };
        let start = match &self.start {
            Some(s) => parse_date(s)?,
            None => DateWindow::trailing_year(end).start(),
        };
        DateWindow::new(start, end).map_err(|e| CliError::InvalidWindow(e.to_string()))
    }
}

impl SourceArgs {
    /// Build the selected source and the request to send it.
    pub fn resolve(&self, config: &AppConfig) -> CliResult<(Box<dyn PriceSource>, PriceRequest)> {
        let interval = self.interval.unwrap_or(config.defaults.interval);

        if let Some(path) = &self.file {
            let source = create_csv_source(path)?;
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("prices")
                .to_string();
            return Ok((Box::new(source), PriceRequest::new(name, interval)));
        }

        if let Some(name) = &self.dataset {
            let request = parse_dataset_name(name)?;
            let source = create_example_data(data_dir(self.data_dir.as_deref(), config))?;
            return Ok((Box::new(source), request));
        }

        if let Some(symbol) = &self.symbol {
            let mut av = config.alphavantage.clone();
            if let Some(key) = &self.api_key {
                av.api_key = key.clone();
            }
            if av.api_key.trim().is_empty() {
                return Err(CliError::MissingArgument(
                    "--api-key (or ALPHAVANTAGE_API_KEY)".into(),
                ));
            }
            let client = AlphaVantageClient::new(av)?;
            return Ok((Box::new(client), PriceRequest::new(symbol.clone(), interval)));
        }

        Err(CliError::MissingSource)
    }

    /// Fetch the price series.
    pub async fn load(&self, config: &AppConfig) -> anyhow::Result<LoadedPrices> {
        let (source, request) = self.resolve(config)?;
        info!(request = %request, "fetching prices");
        let series = source.fetch(&request).await.map_err(CliError::from)?;
        info!(observations = series.len(), "loaded prices");
        Ok(LoadedPrices {
            label: request.to_string(),
            series,
        })
    }
}

/// Returns of the series that fall inside the window.
pub fn windowed_returns(prices: &LoadedPrices, window: &DateWindow) -> ReturnSeries {
    prices.series.returns().within(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailrisk_traits::TraitError;

    fn no_source() -> SourceArgs {
        SourceArgs {
            file: None,
            dataset: None,
            data_dir: None,
            symbol: None,
            interval: None,
            api_key: None,
        }
    }

    #[test]
    fn test_window_defaults_to_trailing_year() {
        let args = WindowArgs {
            start: None,
            end: Some("2025-09-30".into()),
        };
        let window = args.resolve().unwrap();
        assert_eq!(window.end(), Date::from_ymd(2025, 9, 30).unwrap());
        assert_eq!(window.start(), Date::from_ymd(2024, 9, 30).unwrap());
    }

    #[test]
    fn test_window_rejects_reversed_and_bad_dates() {
        let reversed = WindowArgs {
            start: Some("2025-02-01".into()),
            end: Some("2025-01-01".into()),
        };
        assert!(matches!(reversed.resolve(), Err(CliError::InvalidWindow(_))));

        let bad = WindowArgs {
            start: Some("01/02/2025".into()),
            end: None,
        };
        assert!(matches!(bad.resolve(), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_missing_source() {
        assert!(matches!(
            no_source().resolve(&AppConfig::default()),
            Err(CliError::MissingSource)
        ));
    }

    #[test]
    fn test_symbol_requires_key() {
        let args = SourceArgs {
            symbol: Some("IBM".into()),
            ..no_source()
        };
        assert!(matches!(
            args.resolve(&AppConfig::default()),
            Err(CliError::MissingArgument(_))
        ));

        let args = SourceArgs {
            api_key: Some("KEY".into()),
            ..args
        };
        let (_, request) = args.resolve(&AppConfig::default()).unwrap();
        assert_eq!(request.symbol, "IBM");
        assert_eq!(request.interval, Interval::Daily);
    }

    #[test]
    fn test_missing_file_is_source_error() {
        let args = SourceArgs {
            file: Some(PathBuf::from("/nonexistent/prices.csv")),
            ..no_source()
        };
        let err = args.resolve(&AppConfig::default()).err().unwrap();
        assert!(matches!(err, CliError::Source(TraitError::NotFound(_))));
        assert!(err.to_string().starts_with("Price source error"));
    }

    #[test]
    fn test_data_dir_precedence() {
        let mut config = AppConfig::default();
        assert_eq!(data_dir(None, &config), PathBuf::from(DEFAULT_DATA_DIR));

        config.data.data_dir = Some(PathBuf::from("from-config"));
        assert_eq!(data_dir(None, &config), PathBuf::from("from-config"));
        assert_eq!(
            data_dir(Some(Path::new("from-flag")), &config),
            PathBuf::from("from-flag")
        );
    }

    #[test]
    fn test_dataset_resolves_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = SourceArgs {
            dataset: Some("MSFT_week".into()),
            data_dir: Some(dir.path().to_path_buf()),
            ..no_source()
        };
        let (_, request) = args.resolve(&AppConfig::default()).unwrap();
        assert_eq!(request.symbol, "MSFT");
        assert_eq!(request.interval, Interval::Weekly);
    }
}
