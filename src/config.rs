//! Configuration management and validation.
//!
//! Provides the data-source settings used by the fetch layer. Values come
//! from defaults, then the environment, then explicit builder calls.

use crate::constants::{
    DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_METAR_URL, DEFAULT_TIMEOUT_SECS, METAR_TIMEOUT_ENV,
    METAR_URL_ENV, USER_AGENT,
};
use crate::error::{MetarError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Settings for retrieving reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL; the upper-cased station code is appended to it
    pub metar_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Largest envelope accepted for one station
    pub max_response_bytes: usize,

    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metar_url: DEFAULT_METAR_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `METARURL` and `METAR_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the variable names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(METAR_URL_ENV).filter(|url| !url.trim().is_empty()) {
            debug!("Using environment variable {}: {}", METAR_URL_ENV, url);
            config.metar_url = url;
        }

        if let Some(timeout) = lookup(METAR_TIMEOUT_ENV) {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring {}={}: not a whole number of seconds",
                    METAR_TIMEOUT_ENV, timeout
                ),
            }
        }

        config
    }

    /// Set the base URL
    pub fn with_metar_url(mut self, url: impl Into<String>) -> Self {
        self.metar_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the envelope size limit
    pub fn with_max_response_bytes(mut self, bytes: usize) -> Self {
        self.max_response_bytes = bytes;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject settings that cannot produce a request
    pub fn validate(&self) -> Result<()> {
        if self.metar_url.trim().is_empty() {
            return Err(MetarError::configuration("METAR URL must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(MetarError::configuration("timeout must be at least one second"));
        }
        if self.max_response_bytes == 0 {
            return Err(MetarError::configuration(
                "maximum response size must be greater than zero",
            ));
        }
        Ok(())
    }
}
