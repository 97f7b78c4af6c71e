//! BoxKit Settings Crate
//!
//! Loads, validates, and saves cutting job configuration.

pub mod config;

pub use config::{default_config_path, JobConfig, DEFAULT_CONFIG_FILE};
