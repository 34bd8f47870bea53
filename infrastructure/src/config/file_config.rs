//! TOML configuration file structure.
//!
//! Everything is optional; any file only overrides the defaults it
//! names.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of `cybergauge.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub banks: BanksConfig,
    pub wizard: WizardConfig,
    pub output: OutputConfig,
}

/// `[banks]`: where the question banks live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BanksConfig {
    /// Base directory; bank files are read from `<base_dir>/questions/`.
    pub base_dir: PathBuf,
}

impl Default for BanksConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }
}

/// `[wizard]`: interactive flow behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Print the builder trace after every question-set build.
    pub debug: bool,
}

/// `[output]`: terminal output behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colorize console output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
