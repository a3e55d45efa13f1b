//! Component Histogram - interactive menu over the clustering threshold presets.

use anyhow::{Context, Result};
use clap::Parser;
use component_histogram::charts::PngDisplay;
use component_histogram::cli::Args;
use component_histogram::gui::WindowDisplay;
use component_histogram::menu::run_menu;
use component_histogram::{plot_components, HistogramDisplay, PresetList};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the menu on stdout stays clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let presets = match &args.presets {
        Some(path) => PresetList::from_json_file(path)
            .with_context(|| format!("loading presets from {}", path.display()))?,
        None => PresetList::default(),
    };

    let mut display: Box<dyn HistogramDisplay> = match &args.png_dir {
        Some(dir) => Box::new(PngDisplay::new(dir.clone())),
        None => Box::new(WindowDisplay::new()),
    };

    let stdin = io::stdin();
    run_menu(stdin.lock(), io::stdout(), &presets, |preset| {
        plot_components(&preset.path, &preset.title, display.as_mut())
    })
}
