//! Database connection settings.

use sqlx::postgres::PgConnectOptions;

/// Default PostgreSQL port.
pub const DEFAULT_PORT: u16 = 5432;

/// Connection settings for the names database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host (default: "127.0.0.1").
    pub host: String,

    /// Database port (default: 5432).
    pub port: u16,

    /// Database name (default: "namemycat").
    pub database: String,

    /// Role to connect as (default: "namemycat").
    pub user: String,

    /// Password for `user` (default: "namemycat").
    pub password: String,
}

impl DatabaseConfig {
    /// Load settings from `PG_HOST`, `PG_PORT`, `PG_DB`, `PG_USER` and `PG_PASS`.
    ///
    /// Unset variables keep their defaults. An unparsable port is logged and
    /// replaced by the default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match std::env::var("PG_PORT") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "Invalid PG_PORT, using default");
                DEFAULT_PORT
            }),
            Err(_) => defaults.port,
        };

        Self {
            host: std::env::var("PG_HOST").unwrap_or(defaults.host),
            port,
            database: std::env::var("PG_DB").unwrap_or(defaults.database),
            user: std::env::var("PG_USER").unwrap_or(defaults.user),
            password: std::env::var("PG_PASS").unwrap_or(defaults.password),
        }
    }

    /// Build sqlx connection options from these settings.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: DEFAULT_PORT,
            database: "namemycat".into(),
            user: "namemycat".into(),
            password: "namemycat".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_setup() {
        let config = DatabaseConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "namemycat");
        assert_eq!(config.user, "namemycat");
        assert_eq!(config.password, "namemycat");
    }

    #[test]
    fn connect_options_carry_settings() {
        let config = DatabaseConfig {
            host: "db.internal".into(),
            port: 6543,
            database: "cats".into(),
            user: "felix".into(),
            password: "meow".into(),
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("cats"));
        assert_eq!(options.get_username(), "felix");
    }
}
