//! CSV price files.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::StringRecord;
use log::debug;

use tailrisk_core::{Date, PriceObservation, PriceSeries};
use tailrisk_traits::error::TraitError;
use tailrisk_traits::market_data::{PriceRequest, PriceSource, SourceType};

// =============================================================================
// COLUMN LAYOUT
// =============================================================================

/// Positions of the recognised columns in a header row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PriceColumns {
    open: Option<usize>,
    high: Option<usize>,
    low: Option<usize>,
    close: Option<usize>,
    adj_close: Option<usize>,
    volume: Option<usize>,
}

impl PriceColumns {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut columns = Self::default();
        // column 0 is the date index, whatever it is called
        for (i, name) in headers.iter().enumerate().skip(1) {
            let slot = match normalize(name).as_str() {
                "open" => &mut columns.open,
                "high" => &mut columns.high,
                "low" => &mut columns.low,
                "close" => &mut columns.close,
                "adj close" | "adjclose" | "adj_close" | "adjusted close" => {
                    &mut columns.adj_close
                }
                "volume" => &mut columns.volume,
                _ => continue,
            };
            slot.get_or_insert(i);
        }
        columns
    }

    fn has_price(&self) -> bool {
        self.close.is_some() || self.adj_close.is_some()
    }
}

fn normalize(header: &str) -> String {
    header
        .trim()
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Numeric cell, `None` when empty or not a finite number.
fn cell(record: &StringRecord, index: Option<usize>) -> Option<f64> {
    let raw = record.get(index?)?.trim();
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse CSV price data.
///
/// The first column is the observation date (`YYYY-MM-DD`, any time suffix
/// is ignored). Other columns are matched by name, case-insensitively.
/// Empty or non-numeric cells are treated as missing.
///
/// # Errors
///
/// - `TraitError::ParseError` for malformed CSV, an unparseable date, or a
///   header without `Adj Close` or `Close` ("no valid price column found")
/// - `TraitError::InvalidData` when two rows share a date
pub fn parse_price_csv<R: Read>(reader: R) -> Result<PriceSeries, TraitError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| TraitError::ParseError(e.to_string()))?
        .clone();
    let columns = PriceColumns::from_headers(&headers);
    if !columns.has_price() {
        return Err(TraitError::ParseError("no valid price column found".into()));
    }

    let mut observations = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| TraitError::ParseError(e.to_string()))?;
        let raw_date = record.get(0).unwrap_or_default();
        if raw_date.is_empty() && record.iter().all(str::is_empty) {
            continue;
        }

        // header is line 1
        let date = Date::parse_leading(raw_date)
            .map_err(|e| TraitError::ParseError(format!("line {}: {}", row + 2, e)))?;

        observations.push(PriceObservation {
            date,
            open: cell(&record, columns.open),
            high: cell(&record, columns.high),
            low: cell(&record, columns.low),
            close: cell(&record, columns.close),
            adj_close: cell(&record, columns.adj_close),
            volume: cell(&record, columns.volume),
        });
    }

    debug!("parsed {} price rows", observations.len());
    Ok(PriceSeries::new(observations)?)
}

// =============================================================================
// CSV PRICE SOURCE
// =============================================================================

/// A single CSV price file.
///
/// The file is read on every fetch and the request is ignored: the file
/// holds exactly one series.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    file_path: PathBuf,
}

impl CsvPriceSource {
    /// Create a source for `file_path`.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PriceSource for CsvPriceSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    async fn fetch(&self, _request: &PriceRequest) -> Result<PriceSeries, TraitError> {
        let bytes = tokio::fs::read(&self.file_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TraitError::NotFound(self.file_path.display().to_string())
            } else {
                TraitError::from(e)
            }
        })?;
        parse_price_csv(bytes.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tailrisk_core::{Interval, PriceField};

    const FULL: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume
2025-01-03,101,103,100,102,101.5,1200
2025-01-02,100,102,99,100,99.5,1000
2025-01-06,102,104,101,103,,900
";

    #[test]
    fn test_parse_full_layout() {
        let series = parse_price_csv(FULL.as_bytes()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.first_date(), Date::from_ymd(2025, 1, 2).ok());

        let first = &series.observations()[0];
        assert_eq!(first.open, Some(100.0));
        assert_eq!(first.adj_close, Some(99.5));
        assert_eq!(first.volume, Some(1000.0));

        // empty cell is missing, not zero
        assert_eq!(series.observations()[2].adj_close, None);
        assert_eq!(series.reference_field(), PriceField::AdjustedClose);
    }

    #[test]
    fn test_close_only() {
        let csv = "timestamp,close\n2025-01-02,10\n2025-01-03,11\n";
        let series = parse_price_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.reference_field(), PriceField::Close);
        assert_eq!(series.returns().len(), 1);
    }

    #[test]
    fn test_headers_case_insensitive() {
        let csv = "DATE,CLOSE,adj close\n2025-01-02 00:00:00,10,9\n2025-01-03T00:00:00,11,10\n";
        let series = parse_price_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.observations()[1].adj_close, Some(10.0));
        assert_eq!(series.last_date(), Date::from_ymd(2025, 1, 3).ok());
    }

    #[test]
    fn test_no_price_column() {
        let csv = "Date,Open,Volume\n2025-01-02,10,100\n";
        let err = parse_price_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no valid price column found"));
    }

    #[test]
    fn test_non_numeric_cells_missing() {
        let csv = "Date,Close\n2025-01-02,n/a\n2025-01-03,11\n2025-01-06,NaN\n";
        let series = parse_price_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.observations()[0].close, None);
        assert_eq!(series.observations()[2].close, None);
    }

    #[test]
    fn test_bad_date_reports_line() {
        let csv = "Date,Close\n2025-01-02,10\nyesterday,11\n";
        let err = parse_price_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, TraitError::ParseError(_)));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let csv = "Date,Close\n2025-01-02,10\n2025-01-02,11\n";
        assert!(matches!(
            parse_price_csv(csv.as_bytes()),
            Err(TraitError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn test_csv_source_fetch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let source = CsvPriceSource::new(file.path());
        assert_eq!(source.source_type(), SourceType::File);
        let series = source
            .fetch(&PriceRequest::new("ignored", Interval::Daily))
            .await
            .unwrap();
        assert_eq!(series, parse_price_csv(FULL.as_bytes()).unwrap());
    }

    #[tokio::test]
    async fn test_csv_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvPriceSource::new(dir.path().join("missing.csv"));
        let err = source
            .fetch(&PriceRequest::new("X", Interval::Daily))
            .await
            .unwrap_err();
        assert!(matches!(err, TraitError::NotFound(_)));
    }
}
