//! CLI module for the user management API
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args on top of resolved configuration)
//! - Startup orchestration for the serve command

pub mod config_merger;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use parser::{Cli, Commands};

use crate::config::{Defaults, Environment, Settings, resolve};
use crate::server::Server;

/// Run the command selected on the command line
///
/// Resolves the configuration for the selected environment, applies CLI
/// overrides, and either prints the effective settings (--dry-run) or
/// starts the server. Any configuration error terminates the process with
/// exit code 1 before the server binds its listener.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let environment = resolve_environment(&cli);
    let settings = resolve_settings(&cli, environment);

    if matches!(cli.command, Some(Commands::Serve { dry_run: true, .. })) {
        return print_effective_settings(&settings, environment);
    }

    crate::logger::init(&settings.logging)?;

    if settings.server.host == "0.0.0.0" && settings.server.port < 1024 {
        tracing::warn!(
            port = settings.server.port,
            "Binding to 0.0.0.0 on a privileged port typically requires root privileges"
        );
    }

    Server::new(settings, environment).run().await
}

/// Determine the target environment, preferring the --env flag over APP_ENV
fn resolve_environment(cli: &Cli) -> Environment {
    let detected = match cli.env.clone() {
        Some(env) => Ok(env.into()),
        None => Environment::from_env(),
    };

    detected.unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Resolve settings for the environment and apply CLI overrides
fn resolve_settings(cli: &Cli, environment: Environment) -> Settings {
    let resolved = resolve(environment, cli.config.as_deref(), &Defaults::builtin())
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        });

    ConfigurationMerger::new(resolved)
        .merge_cli_args(cli, environment)
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        })
}

/// Print the validated effective configuration with secrets redacted
fn print_effective_settings(settings: &Settings, environment: Environment) -> anyhow::Result<()> {
    println!("Configuration is valid for the {} environment", environment);
    println!("Server would bind to {}", settings.server.address());
    println!("{}", serde_json::to_string_pretty(&settings.redacted())?);
    Ok(())
}
