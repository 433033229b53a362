use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables of the calculator front end. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of history entries kept, most recent first.
    pub history_limit: usize,
    /// How long to wait for a currency rate feed before using the fallback table.
    pub rates_timeout_ms: u64,
    pub base_currency: String,
    pub parse_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: 20,
            rates_timeout_ms: 5000,
            base_currency: "USD".to_string(),
            parse_cache_capacity: 128,
        }
    }
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn rates_timeout(&self) -> Duration {
        Duration::from_millis(self.rates_timeout_ms)
    }
}
