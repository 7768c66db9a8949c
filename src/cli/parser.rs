//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// A user management REST API server
#[derive(Parser, Debug)]
#[command(name = "user-management-api")]
#[command(about = "A user management REST API server")]
#[command(long_about = "
User Management API is a RESTful web service with layered configuration
management. Settings are resolved from built-in defaults, an optional TOML
configuration file, environment variables, and command-line flags, in
ascending priority. Production deployments are validated against unsafe
settings before the server starts.

EXAMPLES:
    # Start the server with default configuration
    user-management-api serve

    # Start server on custom host and port
    user-management-api serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    user-management-api --config /etc/user-management-api/production.toml serve

    # Force the production environment with quiet logging
    user-management-api --env production --quiet serve

    # Check configuration without starting server
    user-management-api serve --dry-run

For more information about configuration options, see the documentation.
")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the default
    /// `config.toml`. The file should be in TOML format and contain valid
    /// configuration sections. The file must exist and be readable.
    ///
    /// Example: --config /etc/user-management-api/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment instead of reading
    /// the APP_ENV environment variable. The environment controls which
    /// validation rules apply to the resolved configuration.
    ///
    /// Available values: development (dev), staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level, showing detailed information
    /// about application operations. Useful for troubleshooting.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only, hiding informational messages.
    /// Useful for production deployments or automated scripts.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Launches the HTTP server with the resolved settings. The server will
    /// bind to the specified host and port, begin accepting requests, and
    /// shut down gracefully on SIGINT or SIGTERM.
    ///
    /// Examples:
    ///   user-management-api serve                           # Start with defaults
    ///   user-management-api serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   user-management-api serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// The network interface address where the server will listen for connections.
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections from any interface.
        /// Must be a valid IPv4 address, hostname, or 'localhost'.
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// The TCP port where the server will accept HTTP connections.
        /// Must be between 1 and 65535. Ports below 1024 typically require root privileges.
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Set the logging verbosity for this server instance.
        /// This overrides both configuration file settings and global --verbose/--quiet flags.
        ///
        /// Available levels: error, warn, info, debug
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        ///
        /// Performs a complete configuration resolution and validation check
        /// without starting the server, then prints the effective settings
        /// with secrets redacted.
        /// Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

impl From<LogLevel> for crate::config::LogLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => crate::config::LogLevel::Error,
            LogLevel::Warn => crate::config::LogLevel::Warn,
            LogLevel::Info => crate::config::LogLevel::Info,
            LogLevel::Debug => crate::config::LogLevel::Debug,
        }
    }
}
