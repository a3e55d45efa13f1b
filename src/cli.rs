//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Connected-component size histogram viewer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file replacing the built-in preset list
    #[arg(long)]
    pub presets: Option<PathBuf>,

    /// Write charts as PNG files into this directory instead of opening a window
    #[arg(long)]
    pub png_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Default tracing filter for these arguments.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["component-histogram"]).unwrap();

        assert!(args.presets.is_none());
        assert!(args.png_dir.is_none());
        assert_eq!(args.log_filter(), "warn");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "component-histogram",
            "--presets",
            "presets.json",
            "--png-dir",
            "charts",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.presets, Some(PathBuf::from("presets.json")));
        assert_eq!(args.png_dir, Some(PathBuf::from("charts")));
        assert_eq!(args.log_filter(), "debug");
    }
}
