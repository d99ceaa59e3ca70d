use std::env;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_PORT: u16 = 5500;
pub const DEFAULT_UPSTREAM_URL: &str = "https://extensions.aitopia.ai/ai/prompts";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_url: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => {
                info!("PORT not set, using default: {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let upstream_url = lookup("UPSTREAM_URL").unwrap_or_else(|| {
            info!("UPSTREAM_URL not set, using default: {}", DEFAULT_UPSTREAM_URL);
            DEFAULT_UPSTREAM_URL.to_string()
        });

        Ok(Self { port, upstream_url })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
