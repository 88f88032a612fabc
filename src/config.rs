//! Nested settings value used by the destructuring and operator fixtures.

use serde::{Deserialize, Serialize};

use crate::utils;

pub const DEFAULT_HOST: &str = "127.0.0.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub env: String,
    pub port: u16,
    pub db: Option<DbConfig>,
}

impl Config {
    pub fn development() -> Self {
        Config {
            env: "development".to_string(),
            port: 8080,
            db: Some(DbConfig {
                host: "localhost".to_string(),
                password: "secret_password".to_string(),
            }),
        }
    }

    /// Host of the db section, falling back to [`DEFAULT_HOST`] when the
    /// section is absent.
    pub fn db_host(&self) -> &str {
        self.db.as_ref().map(|db| db.host.as_str()).unwrap_or(DEFAULT_HOST)
    }

    pub fn start(&self) {
        utils::log("Starting...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = Config::development();
        assert_eq!(config.env, "development");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_host(), "localhost");
    }

    #[test]
    fn test_db_host_falls_back_when_section_missing() {
        let config = Config {
            db: None,
            ..Config::development()
        };
        assert_eq!(config.db_host(), DEFAULT_HOST);
    }
}
