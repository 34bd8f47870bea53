//! Presentation layer for cybergauge
//!
//! This crate contains CLI definitions, output formatters, and the
//! interactive wizard. It is thin glue around the builder: it collects
//! a profile, hands it to the engine, and renders what comes back.

pub mod cli;
pub mod output;
pub mod wizard;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use wizard::flow::{Wizard, WizardError};
