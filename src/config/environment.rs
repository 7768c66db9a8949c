//! Environment selection for the application

use std::str::FromStr;

use crate::config::error::ConfigError;

/// Application environment
///
/// The environment only controls validation strictness: production enforces
/// the strict rule set, every other environment is permissive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Development environment
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

impl Environment {
    /// Environment variable selecting the current environment
    pub const ENV_VAR: &'static str = "APP_ENV";

    /// Read the environment from the `APP_ENV` environment variable
    ///
    /// The variable is required; there is no fallback environment. An unset
    /// or empty variable is `ConfigError::MissingEnvironment`, an
    /// unrecognized value is `ConfigError::InvalidEnvironment`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Err(ConfigError::MissingEnvironment),
        }
    }

    /// Convert the environment to a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Whether the strict production validation rules apply
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
