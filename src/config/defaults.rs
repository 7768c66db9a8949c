//! Built-in fallback defaults and the configuration key registry

use std::collections::BTreeMap;

/// Placeholder JWT secret shipped with the built-in defaults
///
/// Production refuses to start while `jwt.secret` still equals this value.
pub const PLACEHOLDER_JWT_SECRET: &str = "changeme";

/// Dotted configuration keys understood by the resolver
///
/// The registry drives the environment variable overlay and the
/// defaults coverage check; adding a field to `Settings` means adding
/// its key here.
pub mod keys {
    pub const SERVER_HOST: &str = "server.host";
    pub const SERVER_PORT: &str = "server.port";
    pub const SERVER_READ_TIMEOUT: &str = "server.read_timeout";
    pub const SERVER_WRITE_TIMEOUT: &str = "server.write_timeout";
    pub const SERVER_IDLE_TIMEOUT: &str = "server.idle_timeout";
    pub const DATABASE_HOST: &str = "database.host";
    pub const DATABASE_PORT: &str = "database.port";
    pub const DATABASE_USER: &str = "database.user";
    pub const DATABASE_PASSWORD: &str = "database.password";
    pub const DATABASE_NAME: &str = "database.name";
    pub const DATABASE_SSL_MODE: &str = "database.ssl_mode";
    pub const JWT_SECRET: &str = "jwt.secret";
    pub const JWT_EXPIRATION: &str = "jwt.expiration";
    pub const LOGGING_LEVEL: &str = "logging.level";
    pub const LOGGING_FORMAT: &str = "logging.format";

    /// Every configuration key, in section order
    pub const ALL: &[&str] = &[
        SERVER_HOST,
        SERVER_PORT,
        SERVER_READ_TIMEOUT,
        SERVER_WRITE_TIMEOUT,
        SERVER_IDLE_TIMEOUT,
        DATABASE_HOST,
        DATABASE_PORT,
        DATABASE_USER,
        DATABASE_PASSWORD,
        DATABASE_NAME,
        DATABASE_SSL_MODE,
        JWT_SECRET,
        JWT_EXPIRATION,
        LOGGING_LEVEL,
        LOGGING_FORMAT,
    ];
}

/// Immutable mapping of configuration keys to fallback string values
///
/// The map is passed to `resolve` as an explicit argument; there is no
/// global default registry. `Defaults::builtin()` is the deployment's
/// fixed map and covers every key in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    values: BTreeMap<&'static str, String>,
}

impl Defaults {
    /// The built-in defaults covering every key in the registry
    pub fn builtin() -> Self {
        let mut values = BTreeMap::new();
        values.insert(keys::SERVER_HOST, "127.0.0.1".to_string());
        values.insert(keys::SERVER_PORT, "3000".to_string());
        values.insert(keys::SERVER_READ_TIMEOUT, "10s".to_string());
        values.insert(keys::SERVER_WRITE_TIMEOUT, "10s".to_string());
        values.insert(keys::SERVER_IDLE_TIMEOUT, "60s".to_string());
        values.insert(keys::DATABASE_HOST, "localhost".to_string());
        values.insert(keys::DATABASE_PORT, "5432".to_string());
        values.insert(keys::DATABASE_USER, "postgres".to_string());
        values.insert(keys::DATABASE_PASSWORD, "postgres".to_string());
        values.insert(keys::DATABASE_NAME, "users".to_string());
        values.insert(keys::DATABASE_SSL_MODE, "disable".to_string());
        values.insert(keys::JWT_SECRET, PLACEHOLDER_JWT_SECRET.to_string());
        values.insert(keys::JWT_EXPIRATION, "24h".to_string());
        values.insert(keys::LOGGING_LEVEL, "info".to_string());
        values.insert(keys::LOGGING_FORMAT, "text".to_string());
        Self { values }
    }

    /// Replace a single default value, keeping the rest
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Look up the default value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate over all key/value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }
}
