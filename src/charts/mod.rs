//! Charts module - Histogram rendering

pub mod axis;
mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, BAR_COLOR, BAR_WIDTH, X_AXIS_LABEL, Y_AXIS_LABEL};
pub use renderer::{PngDisplay, StaticChartRenderer};
