//! CLI module for eyea-admin
//!
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution
//! - Command handlers for serve and generate-api-key

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::logger::init_logger;

/// Load configuration files and apply CLI overrides.
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> AppResult<Settings> {
    let merger = ConfigurationMerger::from_cli(cli)?;
    Ok(merger.merge_cli_args(cli)?)
}

/// Install the global tracing subscriber from `settings.logger`.
pub fn init_logger_from_settings(settings: &Settings) -> AppResult<()> {
    init_logger(&settings.logger).map_err(|e| AppError::Configuration {
        key: "logger".to_string(),
        source: anyhow::Error::from(e),
    })
}
