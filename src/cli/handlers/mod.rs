//! Command handlers for CLI operations
//!
//! Execution logic for each subcommand, kept apart from parsing and
//! configuration merging.

pub mod api_key;
pub mod serve;

pub use api_key::ApiKeyCommandHandler;
pub use serve::ServeCommandHandler;
