//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override whatever the layered loader produced; the merged
//! result is validated again before use.

use std::path::Path;

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, settings::Settings};

/// Applies CLI overrides on top of file-based configuration.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration honouring `--config` and `--env`.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load(cli.config.as_deref(), cli.env.map(Environment::from))
    }

    /// Load from `config_path` when given, otherwise from the layered loader.
    pub fn load(
        config_path: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = config_path {
            Self::validate_config_file_access(path)?;
            loader = loader.with_config_file(path);
        }
        if let Some(environment) = environment {
            loader = loader.with_environment(environment);
        }

        Ok(Self::new(loader.load()?))
    }

    fn validate_config_file_access(path: &Path) -> Result<(), ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!(
                    "Configuration file does not exist or is not a file: '{}'",
                    path.display()
                ),
            });
        }

        std::fs::File::open(path)
            .map(|_| ())
            .map_err(|e| ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Cannot read configuration file '{}': {}", path.display(), e),
            })
    }

    /// Merge CLI arguments with the base configuration.
    ///
    /// Command-specific flags win over global flags, which win over the
    /// loaded configuration.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }

                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }

                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
            }
            Commands::GenerateApiKey { .. } => {}
        }
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use crate::config::loader::tests::{EnvGuard, TEST_MUTEX};
    use crate::config::loader::{CONFIG_DIR_ENV, CONFIG_FILE_ENV};
    use crate::config::validation::tests::valid_settings;
    use clap::Parser;
    use std::io::Write;

    fn merge(args: &[&str]) -> Settings {
        let cli = Cli::try_parse_from(args).unwrap();
        ConfigurationMerger::new(valid_settings())
            .merge_cli_args(&cli)
            .unwrap()
    }

    #[test]
    fn test_configuration_merger_new() {
        let merger = ConfigurationMerger::new(valid_settings());
        assert_eq!(merger.config(), &valid_settings());
    }

    #[test]
    fn test_merge_verbose_flag() {
        assert_eq!(merge(&["eyea-admin", "--verbose"]).logger.level, "debug");
    }

    #[test]
    fn test_merge_quiet_flag() {
        assert_eq!(merge(&["eyea-admin", "--quiet"]).logger.level, "error");
    }

    #[test]
    fn test_merge_serve_host_and_port() {
        let merged = merge(&["eyea-admin", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        assert_eq!(merged.server.host, "0.0.0.0");
        assert_eq!(merged.server.port, 8080);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merged = merge(&["eyea-admin", "--verbose", "serve", "--log-level", "warn"]);
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_merge_revalidates() {
        let mut base = valid_settings();
        base.jwt.secret = "short".to_string();
        let cli = Cli::try_parse_from(["eyea-admin", "serve"]).unwrap();

        let result = ConfigurationMerger::new(base).merge_cli_args(&cli);
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "jwt.secret"
        ));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 4100

[database]
url = "postgres://localhost/eyea"

[jwt]
secret = "0123456789abcdef0123456789abcdef"

[sso]
api_key = "sso-key-0123456789"
"#
        )
        .unwrap();

        let merger = ConfigurationMerger::load(Some(file.path()), Some(Environment::Test)).unwrap();
        assert_eq!(merger.config().server.port, 4100);
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);

        let result = ConfigurationMerger::load(Some(Path::new("/no/such/eyea.toml")), None);
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "config_file"
        ));
    }
}
