//! Logger module
//!
//! Console logging based on `tracing-subscriber`, configured from the
//! resolved `logging` settings. Text output keeps ANSI colors when stdout
//! is a terminal; JSON output is always plain.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::settings::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber
///
/// The level comes from the resolved settings, so the filter directive is
/// always valid. Initialization can only happen once per process; a second
/// call returns an error.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::new(config.level.as_str());

    match config.format {
        LogFormat::Text => {
            let is_tty = std::io::stdout().is_terminal();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(is_tty)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).json())
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::LogLevel;

    #[test]
    fn test_init_rejects_second_subscriber() {
        let config = LoggingConfig {
            level: LogLevel::Info,
            format: LogFormat::Text,
        };
        // The first call may lose the race against another test that
        // installed a subscriber; either way the global dispatcher is set
        // afterwards, so the second call must fail.
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
