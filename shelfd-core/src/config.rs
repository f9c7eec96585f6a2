//! Database connection settings - environment loading
//!
//! Configuration is read from environment variables once at startup:
//! - `DB_HOST`: database host (default: db)
//! - `DB_NAME`: database name (default: postgres)
//! - `DB_USER`: database user (default: postgres)
//! - `DB_PASS`: database password (default: password)

use sqlx::postgres::PgConnectOptions;

/// Fixed PostgreSQL port; deployments never remap it.
const DB_PORT: u16 = 5432;

/// Connection settings for the PostgreSQL database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env_or("DB_HOST", "db"),
            database: env_or("DB_NAME", "postgres"),
            user: env_or("DB_USER", "postgres"),
            password: env_or("DB_PASS", "password"),
        }
    }

    /// Create config with explicit values (for testing).
    pub fn new(
        host: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            database: database.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Options for opening a single connection to the configured database.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(DB_PORT)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_options_carry_the_config() {
        let config = DbConfig::new("db.internal", "inventory", "svc", "hunter2");
        let options = config.connect_options();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("inventory"));
        assert_eq!(options.get_username(), "svc");
    }

    #[test]
    fn env_or_falls_back_when_unset() {
        assert_eq!(env_or("SHELFD_CONFIG_PROBE_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn env_or_prefers_set_values() {
        std::env::set_var("SHELFD_CONFIG_PROBE", "custom");
        assert_eq!(env_or("SHELFD_CONFIG_PROBE", "fallback"), "custom");
        std::env::remove_var("SHELFD_CONFIG_PROBE");
    }
}
