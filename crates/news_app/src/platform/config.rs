//! Environment configuration for the news reader.
//!
//! Everything is read once at startup and handed to the engine and core; no
//! other module looks at the environment.

use std::path::PathBuf;
use std::time::Duration;

use news_core::{Endpoint, EndpointError, DEFAULT_BASE_URL};
use news_engine::FetchSettings;
use news_logging::{LevelFilter, LogDestination, DEFAULT_LOG_FILE};

pub const ENV_API_URL: &str = "NEWS_API_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "NEWS_REQUEST_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT: &str = "NEWS_CONNECT_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "NEWS_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "NEWS_LOG_FILE";
pub const ENV_LOG_DESTINATION: &str = "NEWS_LOG_DESTINATION";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Endpoint {
        var: &'static str,
        #[source]
        source: EndpointError,
    },
    #[error("{var} must be a positive whole number of seconds, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },
    #[error("{var} must be one of off, error, warn, info, debug, trace; got {value:?}")]
    InvalidLevel { var: &'static str, value: String },
    #[error("{var} must be one of file, terminal, both; got {value:?}")]
    InvalidDestination { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: Endpoint,
    pub fetch: FetchSettings,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a key lookup. Unset and blank values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = get(ENV_API_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let endpoint = Endpoint::parse(&base_url).map_err(|source| ConfigError::Endpoint {
            var: ENV_API_URL,
            source,
        })?;

        let mut fetch = FetchSettings::default();
        if let Some(raw) = get(ENV_REQUEST_TIMEOUT) {
            fetch.request_timeout = parse_seconds(ENV_REQUEST_TIMEOUT, &raw)?;
        }
        if let Some(raw) = get(ENV_CONNECT_TIMEOUT) {
            fetch.connect_timeout = parse_seconds(ENV_CONNECT_TIMEOUT, &raw)?;
        }

        let log_level = match get(ENV_LOG_LEVEL) {
            Some(raw) => news_logging::parse_level(&raw).ok_or(ConfigError::InvalidLevel {
                var: ENV_LOG_LEVEL,
                value: raw,
            })?,
            None => LevelFilter::Info,
        };
        let log_file = PathBuf::from(
            get(ENV_LOG_FILE).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        );
        let log_destination = match get(ENV_LOG_DESTINATION) {
            Some(raw) => LogDestination::from_name(&raw, log_file).ok_or(
                ConfigError::InvalidDestination {
                    var: ENV_LOG_DESTINATION,
                    value: raw,
                },
            )?,
            None => LogDestination::File(log_file),
        };

        Ok(Self {
            endpoint,
            fetch,
            log_level,
            log_destination,
        })
    }
}

fn parse_seconds(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidSeconds {
            var,
            value: raw.to_string(),
        }),
    }
}
