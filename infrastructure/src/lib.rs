//! Infrastructure layer for cybergauge
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the filesystem question-bank adapter and the
//! configuration file loader.

pub mod banks;
pub mod config;

// Re-export commonly used types
pub use banks::fs_bank::FsQuestionBank;
pub use config::{
    file_config::{BanksConfig, FileConfig, OutputConfig, WizardConfig},
    loader::ConfigLoader,
};
