//! # Tailrisk Ext File
//!
//! File-based price data for Tailrisk.
//!
//! - [`CsvPriceSource`]: a single CSV price file
//! - [`ExampleDataDirectory`]: a directory of `<SYMBOL>_<day|week|month>.csv`
//!   datasets
//!
//! Price files have the date in the first column and any of the named
//! columns `Open`, `High`, `Low`, `Close`, `Adj Close`, `Volume`. At least
//! one of `Adj Close` and `Close` must be present.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dataset;
mod prices;

pub use dataset::*;
pub use prices::*;

use std::path::Path;

use tailrisk_traits::error::TraitError;

/// Create a CSV price source, checking that the file exists.
pub fn create_csv_source(path: impl AsRef<Path>) -> Result<CsvPriceSource, TraitError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TraitError::NotFound(path.display().to_string()));
    }
    Ok(CsvPriceSource::new(path))
}

/// Create an example data directory source, checking that the directory exists.
pub fn create_example_data(root: impl AsRef<Path>) -> Result<ExampleDataDirectory, TraitError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(TraitError::NotFound(root.display().to_string()));
    }
    Ok(ExampleDataDirectory::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_paths_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(matches!(
            create_csv_source(&missing),
            Err(TraitError::NotFound(_))
        ));
        assert!(matches!(
            create_example_data(dir.path().join("nope")),
            Err(TraitError::NotFound(_))
        ));
        assert!(create_example_data(dir.path()).is_ok());
    }
}
