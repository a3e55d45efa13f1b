//! Interactive menu
//!
//! One state (awaiting input): a preset number plots that preset, `0` exits,
//! anything else re-prompts.

use crate::config::{Preset, PresetList};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

pub const EXIT_CHOICE: &str = "0";
pub const INVALID_MESSAGE: &str = "Invalid option! Try again.";
pub const EXIT_MESSAGE: &str = "Leaving...";
pub const PROMPT: &str = "Type your option: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1-based preset number
    Plot(usize),
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Match a line of input exactly against the offered choices.
    ///
    /// No trimming or numeric leniency: `" 1"` and `"01"` are invalid.
    pub fn parse(input: &str, preset_count: usize) -> Self {
        if input == EXIT_CHOICE {
            return MenuChoice::Exit;
        }
        (1..=preset_count)
            .find(|n| n.to_string() == input)
            .map(MenuChoice::Plot)
            .unwrap_or(MenuChoice::Invalid)
    }
}

/// Write the menu header and options.
pub fn write_menu<W: Write>(out: &mut W, presets: &PresetList) -> std::io::Result<()> {
    writeln!(out, "\n=== Select a file to visualize ===")?;
    for (i, preset) in presets.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, preset.menu_label())?;
    }
    writeln!(out, "{} - Exit", EXIT_CHOICE)
}

/// Run the menu until the exit choice (or end of input).
///
/// `plot` is called once per valid plot choice. Its errors are not caught:
/// they end the loop and are returned to the caller.
pub fn run_menu<R, W, F>(mut input: R, mut out: W, presets: &PresetList, mut plot: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Preset) -> Result<()>,
{
    let mut line = String::new();
    loop {
        write_menu(&mut out, presets)?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input, leaving menu");
            writeln!(out)?;
            writeln!(out, "{}", EXIT_MESSAGE)?;
            return Ok(());
        }
        let choice = line.trim_end_matches(&['\n', '\r'][..]);

        match MenuChoice::parse(choice, presets.len()) {
            MenuChoice::Plot(n) => {
                // parse only yields numbers within the list
                if let Some(preset) = presets.get(n) {
                    debug!(choice = n, path = %preset.path.display(), "menu selection");
                    plot(preset)?;
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "{}", EXIT_MESSAGE)?;
                return Ok(());
            }
            MenuChoice::Invalid => {
                debug!(input = choice, "invalid menu input");
                writeln!(out, "{}", INVALID_MESSAGE)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    /// Feed `script` to the menu and record every plot call.
    fn drive(script: &str) -> (Result<()>, String, Vec<(PathBuf, String)>) {
        let presets = PresetList::default();
        let mut out = Vec::new();
        let mut calls = Vec::new();

        let result = run_menu(Cursor::new(script), &mut out, &presets, |preset| {
            calls.push((preset.path.clone(), preset.title.clone()));
            Ok(())
        });

        (result, String::from_utf8(out).unwrap(), calls)
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("0", 4), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("1", 4), MenuChoice::Plot(1));
        assert_eq!(MenuChoice::parse("4", 4), MenuChoice::Plot(4));
        assert_eq!(MenuChoice::parse("5", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("abc", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(" 1", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("01", 4), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("+1", 4), MenuChoice::Invalid);
    }

    #[test]
    fn test_menu_text() {
        let mut out = Vec::new();
        write_menu(&mut out, &PresetList::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n=== Select a file to visualize ===\n\
             1 - components1.csv (threshold = 0.0)\n\
             2 - components2.csv (threshold = 0.3)\n\
             3 - components3.csv (threshold = 0.5)\n\
             4 - components4.csv (threshold = 0.9)\n\
             0 - Exit\n"
        );
    }

    #[test]
    fn test_exit_without_plotting() {
        let (result, output, calls) = drive("0\n");

        assert!(result.is_ok());
        assert!(calls.is_empty());
        assert!(output.ends_with("Type your option: Leaving...\n"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (result, output, calls) = drive("5\nabc\n0\n");

        assert!(result.is_ok());
        assert!(calls.is_empty());
        assert_eq!(output.matches(INVALID_MESSAGE).count(), 2);
        assert_eq!(output.matches(PROMPT).count(), 3);
    }

    #[test]
    fn test_each_choice_plots_its_preset_once() {
        let (result, _, calls) = drive("1\n2\n3\n4\n0\n");

        assert!(result.is_ok());
        let thresholds = [("1", "0.0"), ("2", "0.3"), ("3", "0.5"), ("4", "0.9")];
        let expected: Vec<(PathBuf, String)> = thresholds
            .iter()
            .map(|(n, t)| {
                (
                    PathBuf::from(format!("tarefa1/clusters/components{}.csv", n)),
                    format!("Components distribution (Threshold = {})", t),
                )
            })
            .collect();
        assert_eq!(calls, expected);
    }

    #[test]
    fn test_repeated_choice_plots_each_time() {
        let (_, _, calls) = drive("2\n2\r\n0\n");

        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(p, _)| p.ends_with("components2.csv")));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (result, output, calls) = drive("3\n");

        assert!(result.is_ok());
        assert_eq!(calls.len(), 1);
        assert!(output.ends_with(&format!("{}\n", EXIT_MESSAGE)));
    }

    #[test]
    fn test_plot_error_stops_the_loop() {
        let presets = PresetList::default();
        let mut out = Vec::new();
        let mut calls = 0;

        let result = run_menu(Cursor::new("1\n2\n0\n"), &mut out, &presets, |_| {
            calls += 1;
            anyhow::bail!("file not found")
        });

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
