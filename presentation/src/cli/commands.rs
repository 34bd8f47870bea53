//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot builds
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable question list
    Text,
    /// JSON (questions plus trace)
    Json,
}

/// CLI arguments for cybergauge
#[derive(Parser, Debug)]
#[command(name = "cybergauge")]
#[command(author, version, about = "SME cybersecurity self-assessment with traffic-light scoring")]
#[command(long_about = r#"
Cybergauge walks a small or medium business through a cybersecurity
self-assessment. Questions are assembled from layered banks (core, size
tier, sector, compliance overlays) and filtered by the business profile,
then answered one at a time and aggregated into a traffic-light score.

Without flags the interactive wizard starts. With --build the question
set is assembled once and printed, which is useful when authoring banks.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./cybergauge.toml     Project-level config
3. ~/.config/cybergauge/config.toml   Global config

Example:
  cybergauge
  cybergauge --build --size small --sector professional_services --personal-data
  cybergauge --build --output json --trace
"#)]
pub struct Cli {
    /// Assemble and print the question set instead of running the wizard
    #[arg(long)]
    pub build: bool,

    /// Enterprise size (micro, small, medium)
    #[arg(long, value_name = "SIZE")]
    pub size: Option<String>,

    /// Business sector (e.g. hospitality_retail)
    #[arg(long, value_name = "SECTOR")]
    pub sector: Option<String>,

    /// Enable the PCI DSS overlay (card payments / point of sale)
    #[arg(long)]
    pub card_payments: bool,

    /// Enable the GDPR overlay (EU personal data)
    #[arg(long)]
    pub personal_data: bool,

    /// Enable the OT/ICS overlay (networked industrial systems)
    #[arg(long)]
    pub industrial_systems: bool,

    /// Base directory containing the questions/ folder
    #[arg(long, value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Output format for --build
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Print the builder's diagnostic trace
    #[arg(long)]
    pub trace: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
