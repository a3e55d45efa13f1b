//! Chart Plotter Module
//! Draws the component-size histogram with egui_plot.

use crate::charts::axis;
use crate::data::SizeHistogram;
use egui::{Color32, Stroke};
use egui_plot::{Bar, BarChart, GridInput, GridMark, Plot};

/// Bar fill, the usual matplotlib blue.
pub const BAR_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
pub const BAR_WIDTH: f64 = 0.8;

pub const X_AXIS_LABEL: &str = "Connected component size";
pub const Y_AXIS_LABEL: &str = "Amount of components";

/// Creates the interactive histogram using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Grid spacer placing one mark per integer (or per integer step on wide ranges).
    pub fn integer_grid(input: GridInput) -> Vec<GridMark> {
        let (lo, hi) = input.bounds;
        let step_size = axis::integer_step(lo, hi);
        axis::integer_ticks(lo, hi)
            .into_iter()
            .map(|value| GridMark { value, step_size })
            .collect()
    }

    /// One outlined bar per distinct size, height equal to its count.
    pub fn build_bars(histogram: &SizeHistogram) -> Vec<Bar> {
        histogram
            .buckets()
            .iter()
            .map(|bucket| {
                Bar::new(bucket.size, bucket.count as f64)
                    .width(BAR_WIDTH)
                    .fill(BAR_COLOR)
                    .stroke(Stroke::new(1.0, Color32::BLACK))
                    .name(format_tick(bucket.size))
            })
            .collect()
    }

    /// Draw the histogram filling the available space.
    pub fn draw_histogram(ui: &mut egui::Ui, histogram: &SizeHistogram, id: &str) {
        let bars = Self::build_bars(histogram);

        Plot::new(format!("histogram_{}", id))
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .allow_scroll(false)
            .show_grid([false, true])
            .include_y(0.0)
            .x_grid_spacer(Self::integer_grid)
            .y_grid_spacer(Self::integer_grid)
            .x_axis_formatter(|mark, _range| format_tick(mark.value))
            .y_axis_formatter(|mark, _range| {
                if mark.value < 0.0 {
                    String::new()
                } else {
                    format_tick(mark.value)
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).element_formatter(Box::new(
                    |bar: &Bar, _chart: &BarChart| {
                        format!("size {}: {} components", bar.name, bar.value)
                    },
                )));
            });
    }
}

/// Whole numbers without a decimal point, anything else as-is.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
