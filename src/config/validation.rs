//! Configuration validation logic
//!
//! Each section validates itself; `Settings::validate` stops at the first
//! failing section.

use axum::http::HeaderValue;

use crate::config::error::ConfigError;
use crate::config::settings::{
    CorsConfig, DatabaseConfig, JwtConfig, SeedConfig, ServerConfig, Settings, SsoConfig,
};

const MIN_JWT_SECRET_LEN: usize = 32;
const MIN_SSO_API_KEY_LEN: usize = 16;

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// - URL must be a `postgres://` or `postgresql://` URL
    /// - Pool bounds must be positive with min <= max
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL is required. Set it in config or through EYEA_DATABASE__URL.",
            ));
        }

        if !["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ConfigError::validation(
                "database.url",
                "Invalid database URL format. Expected postgres://[user:password@]host[:port]/database",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError {
                field: "database.min_connections".to_string(),
                message: format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            });
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl JwtConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret cannot be empty. Set it through EYEA_JWT__SECRET.",
            ));
        }

        if self.secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::ValidationError {
                field: "jwt.secret".to_string(),
                message: format!(
                    "JWT secret must be at least {} characters.",
                    MIN_JWT_SECRET_LEN
                ),
            });
        }

        if self.expiration_hours <= 0 {
            return Err(ConfigError::validation(
                "jwt.expiration_hours",
                "Token expiration must be positive.",
            ));
        }

        Ok(())
    }
}

impl SsoConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.len() < MIN_SSO_API_KEY_LEN {
            return Err(ConfigError::ValidationError {
                field: "sso.api_key".to_string(),
                message: format!(
                    "SSO API key must be at least {} characters. Generate one with `eyea-admin generate-api-key`.",
                    MIN_SSO_API_KEY_LEN
                ),
            });
        }

        let domain = self.email_domain.trim();
        if domain.is_empty() || domain.contains('@') || !domain.contains('.') {
            return Err(ConfigError::ValidationError {
                field: "sso.email_domain".to_string(),
                message: format!("Invalid email domain '{}'.", self.email_domain),
            });
        }

        Ok(())
    }
}

impl CorsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::validation(
                "cors.allowed_origins",
                "At least one allowed origin is required.",
            ));
        }

        for origin in &self.allowed_origins {
            // Credentials cannot be combined with a wildcard origin
            if origin == "*" && self.allow_credentials {
                return Err(ConfigError::validation(
                    "cors.allowed_origins",
                    "Wildcard origin cannot be used with allow_credentials = true.",
                ));
            }
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::ValidationError {
                    field: "cors.allowed_origins".to_string(),
                    message: format!("Invalid origin '{}'.", origin),
                });
            }
        }

        Ok(())
    }
}

impl SeedConfig {
    /// Admin credentials are only required when seeding is enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }

        for (field, value) in [
            ("seed.admin_email", &self.admin_email),
            ("seed.admin_password", &self.admin_password),
            ("seed.admin_phone", &self.admin_phone),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    field: field.to_string(),
                    message: "Required when seeding is enabled.".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration sections, returning the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.jwt.validate()?;
        self.sso.validate()?;
        self.cors.validate()?;
        self.seed.validate()?;
        self.logger
            .validate()
            .map_err(|e| ConfigError::validation("logger".to_string(), e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::logger::LoggerConfig;

    /// A settings value that passes validation, for tests across the crate.
    pub(crate) fn valid_settings() -> Settings {
        Settings {
            database: DatabaseConfig {
                url: "postgres://localhost/eyea_test".to_string(),
                ..Default::default()
            },
            jwt: JwtConfig {
                secret: "test-secret-key-with-at-least-32-chars".to_string(),
                expiration_hours: 24,
            },
            sso: SsoConfig {
                api_key: "sso-test-key-0123456789".to_string(),
                email_domain: "eyea.org".to_string(),
            },
            ..Default::default()
        }
    }

    fn assert_field_error(result: Result<(), ConfigError>, expected: &str) {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, expected),
            other => panic!("Expected validation error on {}, got {:?}", expected, other),
        }
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_server_port_zero_rejected() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        assert_field_error(settings.validate(), "server.port");
    }

    #[test]
    fn test_database_url_scheme_rejected() {
        let mut settings = valid_settings();
        settings.database.url = "mysql://localhost/eyea".to_string();
        assert_field_error(settings.validate(), "database.url");
    }

    #[test]
    fn test_database_min_exceeds_max() {
        let mut settings = valid_settings();
        settings.database.min_connections = 20;
        settings.database.max_connections = 5;
        assert_field_error(settings.validate(), "database.min_connections");
    }

    #[test]
    fn test_short_jwt_secret_rejected() {
        let mut settings = valid_settings();
        settings.jwt.secret = "too-short".to_string();
        assert_field_error(settings.validate(), "jwt.secret");
    }

    #[test]
    fn test_short_sso_key_rejected() {
        let mut settings = valid_settings();
        settings.sso.api_key = "short".to_string();
        assert_field_error(settings.validate(), "sso.api_key");
    }

    #[test]
    fn test_email_domain_must_be_a_domain() {
        let mut settings = valid_settings();
        settings.sso.email_domain = "@eyea".to_string();
        assert_field_error(settings.validate(), "sso.email_domain");
    }

    #[test]
    fn test_wildcard_origin_with_credentials_rejected() {
        let mut settings = valid_settings();
        settings.cors.allowed_origins = vec!["*".to_string()];
        assert_field_error(settings.validate(), "cors.allowed_origins");

        settings.cors.allow_credentials = false;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_enabled_seed_requires_admin_credentials() {
        let mut settings = valid_settings();
        settings.seed.enabled = true;
        settings.seed.admin_email = "admin@eyea.org".to_string();
        assert_field_error(settings.validate(), "seed.admin_password");

        settings.seed.admin_password = "change-me-now".to_string();
        settings.seed.admin_phone = "251911000000".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_logger_rejected() {
        let mut settings = valid_settings();
        settings.logger = LoggerConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert_field_error(settings.validate(), "logger");
    }
}
