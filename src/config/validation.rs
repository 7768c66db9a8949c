//! Environment-specific configuration validation
//!
//! Development and staging accept whatever the resolver produced.
//! Production enforces hardening rules before the process is allowed
//! to start serving traffic.

use crate::config::defaults::PLACEHOLDER_JWT_SECRET;
use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, JwtConfig, LogLevel, LoggingConfig, Settings};

/// Host value that marks a database co-located with the developer
const LOCAL_DATABASE_HOST: &str = "localhost";

impl JwtConfig {
    fn validate_production(&self) -> Result<(), ConfigError> {
        if self.secret == PLACEHOLDER_JWT_SECRET {
            return Err(ConfigError::InsecureSecret);
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn validate_production(&self) -> Result<(), ConfigError> {
        if self.level == LogLevel::Debug {
            return Err(ConfigError::UnsafeLogLevel);
        }
        Ok(())
    }
}

impl DatabaseConfig {
    fn validate_production(&self) -> Result<(), ConfigError> {
        if self.host == LOCAL_DATABASE_HOST {
            return Err(ConfigError::UnsafeDatabaseHost(self.host.clone()));
        }
        Ok(())
    }
}

impl Settings {
    /// Validate resolved settings for the target environment
    ///
    /// # Validation Rules
    /// Enforced only in production:
    /// - `jwt.secret` must not be the shipped placeholder value
    /// - `logging.level` must not be `debug`
    /// - `database.host` must not be `localhost`
    ///
    /// The first violated rule is reported.
    pub fn validate(&self, environment: Environment) -> Result<(), ConfigError> {
        if !environment.is_production() {
            return Ok(());
        }

        self.jwt.validate_production()?;
        self.logging.validate_production()?;
        self.database.validate_production()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::settings::{LogFormat, ServerConfig, SslMode};

    /// Settings that pass every production rule
    fn hardened_settings() -> Settings {
        Settings {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                read_timeout: Duration::from_secs(10),
                write_timeout: Duration::from_secs(10),
                idle_timeout: Duration::from_secs(60),
            },
            database: DatabaseConfig {
                host: "db.internal.example.com".to_string(),
                port: 5432,
                user: "app".to_string(),
                password: "s3cret".to_string(),
                name: "users".to_string(),
                ssl_mode: SslMode::Require,
            },
            jwt: JwtConfig {
                secret: "f3b1c9d47a8e502463915ce8d7ab0f12".to_string(),
                expiration: Duration::from_secs(24 * 3600),
            },
            logging: LoggingConfig {
                level: LogLevel::Info,
                format: LogFormat::Json,
            },
        }
    }

    #[test]
    fn test_production_accepts_hardened_settings() {
        let settings = hardened_settings();
        assert!(settings.validate(Environment::Production).is_ok());
    }

    #[test]
    fn test_production_rejects_placeholder_secret() {
        let mut settings = hardened_settings();
        settings.jwt.secret = PLACEHOLDER_JWT_SECRET.to_string();
        let err = settings.validate(Environment::Production).unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret));
    }

    #[test]
    fn test_production_rejects_debug_logging() {
        let mut settings = hardened_settings();
        settings.logging.level = LogLevel::Debug;
        let err = settings.validate(Environment::Production).unwrap_err();
        assert!(matches!(err, ConfigError::UnsafeLogLevel));
    }

    #[test]
    fn test_production_rejects_localhost_database() {
        let mut settings = hardened_settings();
        settings.database.host = "localhost".to_string();
        let err = settings.validate(Environment::Production).unwrap_err();
        assert!(matches!(err, ConfigError::UnsafeDatabaseHost(host) if host == "localhost"));
    }

    #[test]
    fn test_production_reports_secret_violation_first() {
        let mut settings = hardened_settings();
        settings.jwt.secret = PLACEHOLDER_JWT_SECRET.to_string();
        settings.logging.level = LogLevel::Debug;
        settings.database.host = "localhost".to_string();
        let err = settings.validate(Environment::Production).unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret));
    }

    #[test]
    fn test_production_matches_literal_localhost_only() {
        // The loopback IP is not covered by the hostname rule
        let mut settings = hardened_settings();
        settings.database.host = "127.0.0.1".to_string();
        assert!(settings.validate(Environment::Production).is_ok());
    }

    #[test]
    fn test_development_skips_checks() {
        let mut settings = hardened_settings();
        settings.jwt.secret = PLACEHOLDER_JWT_SECRET.to_string();
        settings.logging.level = LogLevel::Debug;
        settings.database.host = "localhost".to_string();
        assert!(settings.validate(Environment::Development).is_ok());
    }

    #[test]
    fn test_staging_skips_checks() {
        let mut settings = hardened_settings();
        settings.jwt.secret = PLACEHOLDER_JWT_SECRET.to_string();
        assert!(settings.validate(Environment::Staging).is_ok());
    }
}
