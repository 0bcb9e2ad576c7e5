//! CLI configuration file.
//!
//! Values resolve in order: command-line flag, configuration file, built-in
//! default. A missing file at the default location means "all defaults"; a
//! file named explicitly with `--config` must exist.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use tailrisk_analytics::distribution::Histogram;
use tailrisk_core::{ConfidenceLevel, Interval, InvestmentAmount};
use tailrisk_ext_alphavantage::AlphaVantageConfig;

use crate::error::{CliError, CliResult};

/// Smallest investment amount accepted on the command line.
pub const MIN_AMOUNT: f64 = 100.0;

/// Defaults for risk parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Confidence level as a whole percentage
    #[serde(default = "default_confidence_percent")]
    pub confidence_percent: u8,

    /// Investment amount
    #[serde(default = "default_amount")]
    pub amount: f64,

    /// Histogram bins
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Observation interval for dataset and API sources
    #[serde(default)]
    pub interval: Interval,
}

fn default_confidence_percent() -> u8 {
    95
}

fn default_amount() -> f64 {
    InvestmentAmount::default().value()
}

fn default_bins() -> usize {
    Histogram::DEFAULT_BINS
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            confidence_percent: default_confidence_percent(),
            amount: default_amount(),
            bins: default_bins(),
            interval: Interval::default(),
        }
    }
}

/// Where example datasets live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Example dataset directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Risk parameter defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Dataset settings
    #[serde(default)]
    pub data: DataConfig,

    /// Alpha Vantage client settings
    #[serde(default)]
    pub alphavantage: AlphaVantageConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// With `path`, the file must exist. Without it, the default location is
    /// used when present.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = match path {
            Some(p) => {
                if !p.is_file() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => match default_config_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Check values the flags would also reject.
    pub fn validate(&self) -> CliResult<()> {
        confidence_from_percent(self.defaults.confidence_percent)?;
        amount_from_value(self.defaults.amount)?;
        if self.defaults.bins == 0 {
            return Err(CliError::Config("bins must be at least 1".into()));
        }
        Ok(())
    }
}

/// Default config file location: `<config_dir>/tailrisk/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("tailrisk").join("config.toml"))
}

/// Validated confidence level from a whole percentage.
pub fn confidence_from_percent(percent: u8) -> CliResult<ConfidenceLevel> {
    ConfidenceLevel::from_percent(percent).map_err(|_| CliError::InvalidConfidence(percent.to_string()))
}

/// Validated investment amount, at least [`MIN_AMOUNT`].
pub fn amount_from_value(amount: f64) -> CliResult<InvestmentAmount> {
    if amount.is_nan() || amount < MIN_AMOUNT {
        return Err(CliError::InvalidAmount(amount));
    }
    InvestmentAmount::new(amount).map_err(|_| CliError::InvalidAmount(amount))
}
