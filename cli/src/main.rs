//! CLI entrypoint for cybergauge
//!
//! This is the main binary that wires together all layers: it parses
//! arguments, loads configuration, constructs the filesystem bank
//! adapter and the builder use case, and hands control to either the
//! interactive wizard or the one-shot build mode.

use anyhow::{Context, Result};
use clap::Parser;
use gauge_application::{BuildInput, BuildQuestionSetUseCase};
use gauge_domain::{BusinessProfile, EnterpriseSize, Sector};
use gauge_infrastructure::{ConfigLoader, FsQuestionBank};
use gauge_presentation::{Cli, ConsoleFormatter, OutputFormat, Wizard};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Profile: defaults, overridden by explicit flags
    let mut profile = BusinessProfile::default();
    if let Some(size) = &cli.size {
        profile.size = size.parse::<EnterpriseSize>()?;
    }
    if let Some(sector) = &cli.sector {
        profile.sector = sector.parse::<Sector>()?;
    }

    let base_dir = cli
        .base_dir
        .clone()
        .unwrap_or_else(|| config.banks.base_dir.clone());
    info!(base_dir = %base_dir.display(), "using question banks");

    // === Dependency Injection ===
    let bank = Arc::new(FsQuestionBank::new(base_dir));
    let builder = BuildQuestionSetUseCase::new(bank);

    // One-shot build mode: assemble, print, exit
    if cli.build {
        profile.card_payments = cli.card_payments;
        profile.personal_data = cli.personal_data;
        profile.industrial_systems = cli.industrial_systems;

        let input = BuildInput::from_profile(&profile);
        let built = builder
            .execute(&input)
            .context("failed to build the question set")?;

        match cli.output {
            OutputFormat::Text => {
                print!("{}", ConsoleFormatter::format_question_list(&built));
                if cli.trace {
                    println!();
                    print!("{}", ConsoleFormatter::format_trace(&built.trace));
                }
            }
            OutputFormat::Json => {
                println!("{}", ConsoleFormatter::format_question_list_json(&built));
            }
        }
        return Ok(());
    }

    // Interactive wizard
    let wizard = Wizard::new(builder, profile).with_debug(cli.trace || config.wizard.debug);
    wizard.run().context("wizard aborted")?;

    Ok(())
}
