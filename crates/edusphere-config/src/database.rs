//! PostgreSQL connection settings.
//!
//! - `DATABASE_URL`: connection string (required)
//! - `DB_MAX_CONNECTIONS`: pool size (default 10)
//! - `DB_ACQUIRE_TIMEOUT`: seconds to wait for a pooled connection (default 5)

use std::env;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = get("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            url,
            max_connections: get("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            acquire_timeout: Duration::from_secs(
                get("DB_ACQUIRE_TIMEOUT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url() {
        let err = DatabaseConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
    }

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "postgres://localhost/edusphere".to_string())
        })
        .unwrap();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }
}
