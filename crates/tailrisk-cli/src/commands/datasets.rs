//! Datasets command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tailrisk_ext_file::{create_example_data, DatasetEntry};

use crate::cli::OutputFormat;
use crate::commands::{data_dir, Context};
use crate::error::CliError;
use crate::output::{print_header, print_output, print_warning};

/// Arguments for the datasets command.
#[derive(Args, Debug)]
pub struct DatasetsArgs {
    /// Example dataset directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize, Tabled)]
struct DatasetRow {
    #[tabled(rename = "Dataset")]
    name: String,
    #[tabled(rename = "Request")]
    request: String,
    #[tabled(rename = "File")]
    path: String,
}

impl From<&DatasetEntry> for DatasetRow {
    fn from(entry: &DatasetEntry) -> Self {
        Self {
            name: entry.to_string(),
            request: entry.request().to_string(),
            path: entry.path.display().to_string(),
        }
    }
}

/// Execute the datasets command.
pub fn execute(args: DatasetsArgs, ctx: &Context) -> Result<()> {
    let directory = create_example_data(data_dir(args.data_dir.as_deref(), &ctx.config))
        .map_err(CliError::from)?;
    let entries = directory.datasets().map_err(CliError::from)?;

    if entries.is_empty() {
        print_warning(&format!(
            "No datasets found in {}.",
            directory.root().display()
        ));
    }

    match ctx.format {
        OutputFormat::Minimal => {
            for entry in &entries {
                println!("{}", entry.name());
            }
        }
        format => {
            if format == OutputFormat::Table && !ctx.quiet {
                print_header(&format!("Datasets: {}", directory.root().display()));
            }
            let rows: Vec<DatasetRow> = entries.iter().map(DatasetRow::from).collect();
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
