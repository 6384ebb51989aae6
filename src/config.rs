use std::{env, net::SocketAddr, num::NonZeroUsize, time::Duration};

use thiserror::Error;

#[cfg(test)]
use once_cell::sync::Lazy;
#[cfg(test)]
pub(crate) static ENV_MUTEX: Lazy<std::sync::Mutex<()>> = Lazy::new(|| std::sync::Mutex::new(()));

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    http_bind: SocketAddr,
    dataset_path: String,
    youtube_api_base_url: String,
    youtube_api_key: String,
    youtube_connect_timeout: Duration,
    youtube_total_timeout: Duration,
    max_comments: NonZeroUsize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl Config {
    /// Reads and validates the worker configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when `SENTIMENT_DATASET_PATH` or
    /// `YOUTUBE_API_KEY` is unset, or when a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let dataset_path = env_var("SENTIMENT_DATASET_PATH")?;
        let youtube_api_key = env_var("YOUTUBE_API_KEY")?;
        let http_bind = parse_socket_addr("SENTIMENT_WORKER_HTTP_BIND", "0.0.0.0:9010")?;
        let youtube_api_base_url = env::var("YOUTUBE_API_BASE_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3/".to_string());
        let youtube_connect_timeout = parse_duration_ms("YOUTUBE_CONNECT_TIMEOUT_MS", 3000)?;
        let youtube_total_timeout = parse_duration_ms("YOUTUBE_TOTAL_TIMEOUT_MS", 30000)?;
        let max_comments = parse_non_zero_usize("YOUTUBE_MAX_COMMENTS", 100)?;

        Ok(Self {
            http_bind,
            dataset_path,
            youtube_api_base_url,
            youtube_api_key,
            youtube_connect_timeout,
            youtube_total_timeout,
            max_comments,
        })
    }

    #[must_use]
    pub fn http_bind(&self) -> SocketAddr {
        self.http_bind
    }

    #[must_use]
    pub fn dataset_path(&self) -> &str {
        &self.dataset_path
    }

    #[must_use]
    pub fn youtube_api_base_url(&self) -> &str {
        &self.youtube_api_base_url
    }

    #[must_use]
    pub fn youtube_api_key(&self) -> &str {
        &self.youtube_api_key
    }

    #[must_use]
    pub fn youtube_connect_timeout(&self) -> Duration {
        self.youtube_connect_timeout
    }

    #[must_use]
    pub fn youtube_total_timeout(&self) -> Duration {
        self.youtube_total_timeout
    }

    #[must_use]
    pub fn max_comments(&self) -> NonZeroUsize {
        self.max_comments
    }
}

fn env_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_socket_addr(name: &'static str, default: &str) -> Result<SocketAddr, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());

    raw.parse().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })
}

fn parse_non_zero_usize(name: &'static str, default: usize) -> Result<NonZeroUsize, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    let parsed = raw.parse::<usize>().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })?;
    NonZeroUsize::new(parsed).ok_or_else(|| ConfigError::Invalid {
        name,
        source: anyhow::anyhow!("must be greater than zero"),
    })
}

fn parse_duration_ms(name: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default_ms.to_string());
    let ms = raw.parse::<u64>().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })?;
    Ok(Duration::from_millis(ms))
}
