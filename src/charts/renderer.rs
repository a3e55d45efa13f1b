//! Static Chart Renderer
//! Writes the component-size histogram to a PNG file with plotters.
//!
//! Layout mirrors the window chart: title on top, one outlined bar per
//! distinct size, integer ticks on both axes and horizontal grid lines only.

use crate::charts::axis;
use crate::charts::plotter::{format_tick, BAR_WIDTH, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::data::SizeHistogram;
use crate::plot::{DisplayError, HistogramDisplay};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

const BAR_RGB: RGBColor = RGBColor(31, 119, 180);
const GRID_RGB: RGBColor = RGBColor(200, 200, 200);

/// 8x5 inches at 100 DPI.
pub const DEFAULT_SIZE: (u32, u32) = (800, 500);

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Axis bounds: one unit of padding around the sizes, 10% headroom above
    /// the tallest bar.
    pub fn chart_bounds(histogram: &SizeHistogram) -> ((f64, f64), (f64, f64)) {
        let x = histogram
            .size_range()
            .map(|(lo, hi)| (lo - 1.0, hi + 1.0))
            .unwrap_or((0.0, 1.0));
        let y_max = (histogram.max_count() as f64 * 1.1).ceil().max(1.0);
        (x, (0.0, y_max))
    }

    /// Render `histogram` to a PNG at `output`.
    pub fn render_png(
        histogram: &SizeHistogram,
        title: &str,
        output: &Path,
        size: (u32, u32),
    ) -> Result<(), DisplayError> {
        let root = BitMapBackend::new(output, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let ((x_lo, x_hi), (y_lo, y_hi)) = Self::chart_bounds(histogram);
        let x_labels = axis::integer_ticks(x_lo, x_hi).len().max(2);
        let y_labels = axis::integer_ticks(y_lo, y_hi).len().max(2);

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(GRID_RGB.mix(0.7))
            .x_labels(x_labels)
            .y_labels(y_labels)
            .x_label_formatter(&|v| integer_label(*v))
            .y_label_formatter(&|v| integer_label(*v))
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .draw()
            .map_err(draw_error)?;

        let half = BAR_WIDTH / 2.0;
        let corners = |size: f64, count: usize| [(size - half, 0.0), (size + half, count as f64)];

        chart
            .draw_series(
                histogram
                    .buckets()
                    .iter()
                    .map(|b| Rectangle::new(corners(b.size, b.count), BAR_RGB.filled())),
            )
            .map_err(draw_error)?;
        chart
            .draw_series(
                histogram
                    .buckets()
                    .iter()
                    .map(|b| Rectangle::new(corners(b.size, b.count), BLACK.stroke_width(1))),
            )
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
        Ok(())
    }
}

/// Tick text for whole numbers; fractional key points stay unlabeled.
fn integer_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format_tick(value)
    } else {
        String::new()
    }
}

fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> DisplayError {
    DisplayError::Draw(err.to_string())
}

/// Display that writes each histogram to `<dir>/<file stem>.png` instead of
/// opening a window.
pub struct PngDisplay {
    output_dir: PathBuf,
    size: (u32, u32),
}

impl PngDisplay {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            size: DEFAULT_SIZE,
        }
    }

    /// PNG path for a given component CSV.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "components".to_string());
        self.output_dir.join(format!("{}.png", stem))
    }
}

impl HistogramDisplay for PngDisplay {
    fn show(
        &mut self,
        title: &str,
        source: &Path,
        histogram: &SizeHistogram,
    ) -> Result<(), DisplayError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let output = self.output_path(source);
        StaticChartRenderer::render_png(histogram, title, &output, self.size)?;
        info!(path = %output.display(), "chart written");
        Ok(())
    }
}
