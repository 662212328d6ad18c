//! CLI argument parsing with clap
//!
//! Defines the command-line surface: global configuration flags plus the
//! `serve` and `generate-api-key` subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::utils::api_key::DEFAULT_API_KEY_LENGTH;

/// Admin backend for the EYEA membership dashboard
#[derive(Parser, Debug)]
#[command(name = "eyea-admin")]
#[command(about = "Admin backend for the EYEA membership dashboard")]
#[command(long_about = "
eyea-admin serves the REST API behind the EYEA admin dashboard: user
management, membership applications, donations and subscription payments.

EXAMPLES:
    # Start the server with default configuration
    eyea-admin serve

    # Start server on custom host and port
    eyea-admin serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    eyea-admin --config /path/to/config.toml serve

    # Run in production mode with quiet logging
    eyea-admin --env production --quiet serve

    # Check configuration without starting server
    eyea-admin serve --dry-run

    # Print five fresh SSO API keys
    eyea-admin generate-api-key

    # Print a single 48 character key
    eyea-admin generate-api-key --length 48 --count 1
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Read this single TOML file instead of the layered `config/` directory.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/eyea-admin/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded, taking precedence
    /// over `EYEA_APP_ENV`.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises the log level to debug. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers the log level to error. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Connects the database pool, seeds the admin account and membership
    /// levels when enabled, then serves HTTP until Ctrl+C or SIGTERM.
    ///
    /// Examples:
    ///   eyea-admin serve                           # Start with defaults
    ///   eyea-admin serve --host 0.0.0.0 --port 80  # Bind to all interfaces on port 80
    ///   eyea-admin serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections
        /// from any interface.
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Must be between 1 and 65535.
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Takes precedence over the configuration file and --verbose/--quiet.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate random API keys for the SSO endpoint
    ///
    /// Prints one alphanumeric key per line. Copy one into `sso.api_key`
    /// (or `EYEA_SSO__API_KEY`) and hand it to the calling service.
    ///
    /// Examples:
    ///   eyea-admin generate-api-key                       # Five 32 character keys
    ///   eyea-admin generate-api-key --length 64 --count 1
    GenerateApiKey {
        /// Characters per key (at least 16)
        #[arg(short, long, value_name = "N", default_value_t = DEFAULT_API_KEY_LENGTH, value_parser = super::validation::validate_api_key_length)]
        length: usize,

        /// Number of keys to print (1 to 20)
        #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 5, value_parser = super::validation::validate_api_key_count)]
        count: usize,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["eyea-admin", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["eyea-admin", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["eyea-admin"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.env.is_none());
    }

    #[test]
    fn test_serve_command() {
        let cli = Cli::try_parse_from([
            "eyea-admin",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "warning",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Serve {
                host,
                port,
                log_level,
                dry_run,
            }) => {
                assert_eq!(host, Some("0.0.0.0".to_string()));
                assert_eq!(port, Some(8080));
                assert_eq!(log_level, Some(LogLevel::Warn));
                assert!(!dry_run);
            }
            other => panic!("Expected Serve command, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_api_key_defaults() {
        let cli = Cli::try_parse_from(["eyea-admin", "generate-api-key"]).unwrap();
        match cli.command {
            Some(Commands::GenerateApiKey { length, count }) => {
                assert_eq!(length, 32);
                assert_eq!(count, 5);
            }
            other => panic!("Expected GenerateApiKey command, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_api_key_rejects_short_length() {
        let err = Cli::try_parse_from(["eyea-admin", "generate-api-key", "--length", "8"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_generate_api_key_rejects_large_count() {
        let err = Cli::try_parse_from(["eyea-admin", "generate-api-key", "-n", "21"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_env_alias() {
        let cli = Cli::try_parse_from(["eyea-admin", "--env", "prod"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));
        assert_eq!(
            crate::config::Environment::from(Environment::Production),
            crate::config::Environment::Production
        );
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let err = Cli::try_parse_from(["eyea-admin", "--verbose", "--quiet"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
