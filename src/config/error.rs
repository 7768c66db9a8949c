//! Configuration error types

use thiserror::Error;

/// Configuration error types
///
/// Every variant is fatal at startup: the process must not begin serving
/// traffic with an incomplete or unvalidated configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment selector is not set
    #[error(
        "Environment variable APP_ENV is not set. Valid values are: development, staging, production"
    )]
    MissingEnvironment,

    /// Environment selector holds an unrecognized value
    #[error("Invalid environment '{0}'. Valid values are: development, staging, production")]
    InvalidEnvironment(String),

    /// Configuration file exists but could not be parsed
    #[error("Failed to parse configuration file {path}: {message}")]
    FileParse {
        /// Path of the offending file
        path: String,
        /// Parser error detail
        message: String,
    },

    /// A merged value could not be converted to the declared type of its key
    #[error("Invalid value for {key}: {message}")]
    TypeConversion {
        /// The dotted configuration key that failed conversion
        key: String,
        /// The conversion error message
        message: String,
    },

    /// Placeholder JWT secret rejected in production
    #[error("jwt.secret still holds the placeholder value; set JWT_SECRET before running in production")]
    InsecureSecret,

    /// Debug logging rejected in production
    #[error("logging.level 'debug' is not allowed in production")]
    UnsafeLogLevel,

    /// Local database host rejected in production
    #[error("database.host '{0}' is not allowed in production")]
    UnsafeDatabaseHost(String),

    /// Generic configuration error from config crate
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new type conversion error for a configuration key
    pub fn type_conversion(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::TypeConversion {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a new file parse error
    pub fn file_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::FileParse {
            path: path.into(),
            message: message.into(),
        }
    }
}
