//! Configuration merger for CLI arguments and resolved configuration
//!
//! This module handles merging CLI argument overrides with the resolved
//! configuration, implementing the final step of the configuration
//! precedence chain.

use super::parser::{Cli, Commands};
use crate::config::{ConfigError, Environment, LogLevel, Settings};

/// Configuration merger that applies CLI argument overrides on top of
/// resolved settings
///
/// This struct implements the configuration precedence logic where CLI
/// arguments override every other configuration source.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// This method applies CLI argument overrides according to the precedence
    /// rules:
    /// 1. CLI arguments have highest priority
    /// 2. Resolved configuration values are used as base
    ///
    /// The merged configuration is validated again for the target environment,
    /// so a CLI override cannot smuggle an unsafe value past the production
    /// checks.
    ///
    /// # Arguments
    /// * `cli` - Parsed CLI arguments
    /// * `environment` - Environment whose validation rules apply
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(
        &self,
        cli: &Cli,
        environment: Environment,
    ) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        // Apply global CLI overrides
        self.apply_global_overrides(&mut config, cli);

        // Apply command-specific overrides
        if let Some(ref command) = cli.command {
            self.apply_command_overrides(&mut config, command);
        }

        // Validate the merged configuration
        config.validate(environment)?;

        Ok(config)
    }

    /// Apply global CLI argument overrides
    fn apply_global_overrides(&self, config: &mut Settings, cli: &Cli) {
        // Apply logging level overrides from global flags
        if cli.verbose {
            config.logging.level = LogLevel::Debug;
        } else if cli.quiet {
            config.logging.level = LogLevel::Error;
        }
    }

    /// Apply command-specific CLI argument overrides
    fn apply_command_overrides(&self, config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                // Override server host if provided
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }

                // Override server port if provided
                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }

                // Override log level if provided (command-specific override takes precedence over global)
                if let Some(level) = log_level {
                    config.logging.level = level.clone().into();
                }
            }
        }
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
