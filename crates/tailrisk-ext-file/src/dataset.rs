//! Example dataset directories.
//!
//! A dataset directory holds one CSV file per symbol and interval, named
//! `<SYMBOL>_<suffix>.csv` where the suffix is `day`, `week` or `month`
//! (`MSFT_week.csv`).

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};

use tailrisk_core::{Interval, PriceSeries};
use tailrisk_traits::error::TraitError;
use tailrisk_traits::market_data::{PriceRequest, PriceSource, SourceType};

use crate::prices::parse_price_csv;

/// One dataset found in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    /// Symbol part of the file name
    pub symbol: String,
    /// Interval encoded in the file name
    pub interval: Interval,
    /// Full path of the file
    pub path: PathBuf,
}

impl DatasetEntry {
    /// Dataset name as written in the file name (`MSFT_day`).
    pub fn name(&self) -> String {
        dataset_name(&self.symbol, self.interval)
    }

    /// Request that resolves to this dataset.
    pub fn request(&self) -> PriceRequest {
        PriceRequest::new(self.symbol.clone(), self.interval)
    }
}

impl fmt::Display for DatasetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dataset name for a symbol and interval.
pub fn dataset_name(symbol: &str, interval: Interval) -> String {
    format!("{}_{}", symbol.trim(), interval.file_suffix())
}

/// Splits a dataset name (`MSFT_day`) into a request.
///
/// The suffix after the last underscore must name an interval.
pub fn parse_dataset_name(name: &str) -> Result<PriceRequest, TraitError> {
    let name = name.trim().trim_end_matches(".csv");
    let (symbol, suffix) = name
        .rsplit_once('_')
        .ok_or_else(|| TraitError::InvalidInput(format!("dataset name without interval: {name}")))?;
    if symbol.is_empty() {
        return Err(TraitError::InvalidInput(format!(
            "dataset name without symbol: {name}"
        )));
    }
    let interval: Interval = suffix.parse()?;
    Ok(PriceRequest::new(symbol, interval))
}

/// A directory of example price datasets.
#[derive(Debug, Clone)]
pub struct ExampleDataDirectory {
    root: PathBuf,
}

impl ExampleDataDirectory {
    /// Create a source rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File a request resolves to.
    pub fn path_for(&self, request: &PriceRequest) -> PathBuf {
        self.root
            .join(format!("{}.csv", dataset_name(&request.symbol, request.interval)))
    }

    /// Datasets in the directory, sorted by symbol then interval.
    ///
    /// Files whose names do not follow the naming scheme are skipped.
    pub fn datasets(&self) -> Result<Vec<DatasetEntry>, TraitError> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match parse_dataset_name(stem) {
                Ok(request) => entries.push(DatasetEntry {
                    symbol: request.symbol,
                    interval: request.interval,
                    path,
                }),
                Err(e) => debug!("skipping {}: {}", path.display(), e),
            }
        }

        entries.sort_by(|a, b| {
            a.symbol
                .cmp(&b.symbol)
                .then_with(|| interval_rank(a.interval).cmp(&interval_rank(b.interval)))
        });
        Ok(entries)
    }
}

fn interval_rank(interval: Interval) -> usize {
    Interval::ALL
        .iter()
        .position(|i| *i == interval)
        .unwrap_or(usize::MAX)
}

#[async_trait]
impl PriceSource for ExampleDataDirectory {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    async fn fetch(&self, request: &PriceRequest) -> Result<PriceSeries, TraitError> {
        let path = self.path_for(request);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("no dataset for {} at {}", request, path.display());
                return Err(TraitError::NotFound(dataset_name(
                    &request.symbol,
                    request.interval,
                )));
            }
            Err(e) => return Err(e.into()),
        };
        parse_price_csv(bytes.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Date,Close\n2025-01-02,10\n2025-01-03,11\n";

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["MSFT_week", "MSFT_day", "AAPL_month", "notes", "IBM_year"] {
            std::fs::write(dir.path().join(format!("{name}.csv")), CSV).unwrap();
        }
        std::fs::write(dir.path().join("README.txt"), "ignored").unwrap();
        dir
    }

    #[test]
    fn test_dataset_names() {
        assert_eq!(dataset_name("MSFT", Interval::Weekly), "MSFT_week");

        let request = parse_dataset_name("BABA_month").unwrap();
        assert_eq!(request.symbol, "BABA");
        assert_eq!(request.interval, Interval::Monthly);

        let request = parse_dataset_name("BRK_B_day.csv").unwrap();
        assert_eq!(request.symbol, "BRK_B");

        assert!(parse_dataset_name("MSFT").is_err());
        assert!(parse_dataset_name("_day").is_err());
        assert!(parse_dataset_name("MSFT_year").is_err());
    }

    #[test]
    fn test_listing_sorted_and_filtered() {
        let dir = fixture();
        let data = ExampleDataDirectory::new(dir.path());
        let names: Vec<String> = data.datasets().unwrap().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["AAPL_month", "MSFT_day", "MSFT_week"]);
    }

    #[tokio::test]
    async fn test_fetch_resolves_file() {
        let dir = fixture();
        let data = ExampleDataDirectory::new(dir.path());

        let series = data
            .fetch(&PriceRequest::new("MSFT", Interval::Weekly))
            .await
            .unwrap();
        assert_eq!(series.len(), 2);

        let err = data
            .fetch(&PriceRequest::new("MSFT", Interval::Monthly))
            .await
            .unwrap_err();
        assert!(matches!(err, TraitError::NotFound(ref name) if name == "MSFT_month"));
    }
}
