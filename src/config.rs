use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::poller::{PollerConfig, DEFAULT_POLL_INTERVAL};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_POLL_INTERVAL_SECS: u64 = 24 * 60 * 60;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    MissingRequired(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, e.g. `https://api.example.com/api`
    pub api_base_url: String,
    /// Period between status polls
    pub poll_interval: Duration,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
    /// Where the session token is persisted (None = in memory only)
    pub token_store_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source, e.g. CLI flags layered
    /// over the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = lookup("API_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingRequired("API_BASE_URL"))?;
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "API_BASE_URL",
                value: api_base_url,
            });
        }

        let poll_interval = match lookup("POLL_INTERVAL_SECS") {
            Some(raw) => Duration::from_secs(parse_bounded("POLL_INTERVAL_SECS", &raw, MAX_POLL_INTERVAL_SECS)?),
            None => DEFAULT_POLL_INTERVAL,
        };

        let request_timeout = Duration::from_secs(match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_bounded("REQUEST_TIMEOUT_SECS", &raw, MAX_REQUEST_TIMEOUT_SECS)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        });

        let token_store_path = lookup("TOKEN_STORE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_base_url,
            poll_interval,
            request_timeout,
            token_store_path,
        })
    }

    pub fn poller(&self) -> PollerConfig {
        PollerConfig {
            interval: self.poll_interval,
        }
    }
}

/// Whole seconds in `1..=max`.
fn parse_bounded(key: &'static str, raw: &str, max: u64) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}
