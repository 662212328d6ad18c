//! Command executor for dispatching CLI commands
//!
//! Entry point after parsing: loads configuration where the command needs
//! it and hands off to the matching handler.

use super::handlers::{ApiKeyCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use super::{init_logger_from_settings, load_and_merge_config};
use crate::error::AppResult;

/// Execute the parsed command. No subcommand means `serve`.
///
/// `generate-api-key` runs without loading configuration, so keys can be
/// produced before any config file exists.
pub async fn execute_command(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Some(Commands::GenerateApiKey { length, count }) => {
            ApiKeyCommandHandler::new(*length, *count).execute()
        }
        Some(Commands::Serve { dry_run, .. }) => serve(cli, *dry_run).await,
        None => serve(cli, false).await,
    }
}

async fn serve(cli: &Cli, dry_run: bool) -> AppResult<()> {
    let settings = load_and_merge_config(cli)?;

    if !dry_run {
        init_logger_from_settings(&settings)?;
    }

    ServeCommandHandler::new(settings).execute(dry_run).await
}
