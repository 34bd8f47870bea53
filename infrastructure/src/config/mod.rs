//! Configuration file structures and loading.

pub mod file_config;
pub mod loader;
