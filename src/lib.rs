//! Component Histogram - connected-component size distribution viewer
//!
//! Loads component CSV files produced by a clustering run, counts how many
//! components share each size and shows the distribution as a bar chart.

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod gui;
pub mod menu;
pub mod plot;

pub use config::{Preset, PresetList};
pub use data::{DataLoader, DataProcessor, SizeBucket, SizeHistogram};
pub use plot::{plot_components, DisplayError, HistogramDisplay};
