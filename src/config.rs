use std::collections::HashMap;
use thiserror::Error;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_DATABASE_PATH: &str = "data/quotes.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    /// Build a config from an explicit variable map.
    ///
    /// `PORT` takes precedence over `SERVER_PORT`. Empty values count as unset.
    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| {
            env_map
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        let (port_key, port_str) = match (lookup("PORT"), lookup("SERVER_PORT")) {
            (Some(p), _) => ("PORT", p),
            (None, Some(p)) => ("SERVER_PORT", p),
            (None, None) => ("PORT", DEFAULT_PORT),
        };
        let port = port_str.parse::<u16>().map_err(|_| {
            ConfigError::InvalidValue(port_key.to_string(), "must be a valid u16".to_string())
        })?;

        let database_path = lookup("DATABASE_PATH")
            .unwrap_or(DEFAULT_DATABASE_PATH)
            .to_string();

        Ok(Config {
            port,
            database_path,
        })
    }
}
