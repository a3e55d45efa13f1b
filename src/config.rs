//! Preset configuration
//!
//! The menu offers one plot choice per preset, numbered from 1. The built-in
//! list covers the four clustering thresholds; a JSON file can replace it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of plot choices the menu offers.
pub const PRESET_COUNT: usize = 4;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read preset file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid preset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected {expected} presets, found {found}")]
    WrongCount { expected: usize, found: usize },
}

/// One menu entry: which file to plot and what to call the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Component CSV path, relative to the working directory
    pub path: PathBuf,
    /// Chart title
    pub title: String,
    /// Menu text; the file name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Preset {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            label: Some(label.into()),
        }
    }

    /// Text shown next to the choice number.
    pub fn menu_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| self.path.display().to_string()),
        }
    }
}

/// Ordered presets, looked up by menu choice.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetList {
    presets: Vec<Preset>,
}

impl Default for PresetList {
    fn default() -> Self {
        let threshold = |n: usize, t: &str| {
            Preset::new(
                format!("tarefa1/clusters/components{}.csv", n),
                format!("Components distribution (Threshold = {})", t),
                format!("components{}.csv (threshold = {})", n, t),
            )
        };

        Self {
            presets: vec![
                threshold(1, "0.0"),
                threshold(2, "0.3"),
                threshold(3, "0.5"),
                threshold(4, "0.9"),
            ],
        }
    }
}

impl PresetList {
    pub fn new(presets: Vec<Preset>) -> Result<Self, ConfigError> {
        if presets.len() != PRESET_COUNT {
            return Err(ConfigError::WrongCount {
                expected: PRESET_COUNT,
                found: presets.len(),
            });
        }
        Ok(Self { presets })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let presets: Vec<Preset> = serde_json::from_str(json)?;
        Self::new(presets)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Preset for a 1-based menu choice.
    pub fn get(&self, choice: usize) -> Option<&Preset> {
        choice.checked_sub(1).and_then(|i| self.presets.get(i))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }
}
