//! CSV Data Loader Module
//! Reads the titles dataset from disk using Polars.

use std::path::Path;

use log::info;
use polars::prelude::*;
use thiserror::Error;

/// File the dashboard reads, resolved against the working directory.
pub const DATA_FILE: &str = "netflix_titles.csv";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load the titles CSV using Polars.
///
/// The file is read fully into memory. The dashboard calls this once per
/// render; nothing is cached across interactions, so edits to the file show
/// up on the next selection change.
pub fn load_titles(path: &Path) -> Result<DataFrame, LoadError> {
    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    info!(
        "loaded {} rows, {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}
