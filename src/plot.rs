//! Plot routine: load a component file, count sizes, hand the histogram to a display.

use crate::data::{DataLoader, DataProcessor, SizeHistogram};
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Chart window failed: {0}")]
    Window(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Somewhere a histogram can be shown.
///
/// `show` returns once the display session is over: for a window that is
/// when the user closes it.
pub trait HistogramDisplay {
    fn show(
        &mut self,
        title: &str,
        source: &Path,
        histogram: &SizeHistogram,
    ) -> Result<(), DisplayError>;
}

/// Load `file`, count components per size and display the result under `title`.
///
/// Load failures (missing file, unreadable CSV, no `size` column) are
/// returned to the caller untouched apart from added context.
pub fn plot_components<D>(file: &Path, title: &str, display: &mut D) -> Result<()>
where
    D: HistogramDisplay + ?Sized,
{
    let table = DataLoader::load_csv(file)
        .with_context(|| format!("loading {}", file.display()))?;
    let histogram = DataProcessor::count_sizes(&table);

    if histogram.is_empty() {
        warn!(path = %file.display(), "no numeric sizes found");
    }
    info!(
        path = %file.display(),
        rows = table.row_count(),
        components = histogram.total(),
        distinct_sizes = histogram.buckets().len(),
        "plotting component sizes"
    );

    display.show(title, file, &histogram)?;
    Ok(())
}
