//! Configuration management module
//!
//! Settings are resolved from layered sources with ascending priority:
//! 1. An explicit defaults map covering every key
//! 2. An optional TOML configuration file
//! 3. Per-key environment variables (`SERVER_PORT`, `JWT_SECRET`, ...)
//! 4. `DATABASE_URL`, decomposed into the individual `database.*` keys
//!
//! The target environment comes from `APP_ENV` (or the `--env` flag) and
//! selects the validation rules applied to the resolved settings.

pub mod defaults;
pub mod duration;
pub mod environment;
pub mod error;
pub mod resolver;
pub mod settings;
pub mod validation;

// Re-export public types
pub use defaults::Defaults;
pub use environment::Environment;
pub use error::ConfigError;
pub use resolver::{env_var_name, resolve};
pub use settings::{LogFormat, LogLevel, Settings};
