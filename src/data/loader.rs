//! CSV Data Loader Module
//! Loads connected-component CSV files with Polars and coerces the size column.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Column holding the node count of each component.
pub const SIZE_COLUMN: &str = "size";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Column \"{column}\" not found in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },
}

/// A loaded component table with its size column coerced to numbers.
///
/// `sizes` holds one entry per row; entries that could not be read as a
/// number are `None` so the row count is preserved.
#[derive(Debug, Clone)]
pub struct ComponentTable {
    df: DataFrame,
    sizes: Vec<Option<f64>>,
}

impl ComponentTable {
    /// Coerced size values, one per row.
    pub fn sizes(&self) -> &[Option<f64>] {
        &self.sizes
    }

    /// Number of rows in the table, including rows with a missing size.
    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    /// Column names after whitespace trimming.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// Handles component CSV loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a component CSV file.
    ///
    /// Column names are trimmed before the size column is looked up, so a
    /// header of `" size "` resolves to `size`.
    ///
    /// Every column is read as text (no schema inference) so each size cell
    /// goes through [`parse_number`], however far down the file it sits.
    pub fn load_csv(file_path: &Path) -> Result<ComponentTable, LoaderError> {
        let mut df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(0))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        Self::trim_column_names(&mut df)?;

        let column = df
            .column(SIZE_COLUMN)
            .map_err(|_| LoaderError::MissingColumn {
                column: SIZE_COLUMN.to_string(),
                path: file_path.to_path_buf(),
            })?;
        let sizes = Self::coerce_numeric(column)?;

        debug!(
            path = %file_path.display(),
            rows = df.height(),
            missing = sizes.iter().filter(|v| v.is_none()).count(),
            "loaded component table"
        );

        Ok(ComponentTable { df, sizes })
    }

    fn trim_column_names(df: &mut DataFrame) -> PolarsResult<()> {
        let trimmed: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        df.set_column_names(trimmed)
    }

    /// Coerce a column to numbers, turning anything unreadable into `None`.
    ///
    /// String columns are parsed entry by entry; every other dtype goes
    /// through a cast.
    pub fn coerce_numeric(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
        if column.dtype() == &DataType::String {
            let values = column.str()?;
            return Ok(values
                .into_iter()
                .map(|v| v.and_then(parse_number))
                .collect());
        }

        let cast = column.cast(&DataType::Float64)?;
        Ok(cast
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect())
    }
}

/// Parse a single cell, ignoring surrounding whitespace.
///
/// NaN and infinities count as missing: neither can be drawn as a bar.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
