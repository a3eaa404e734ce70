//! HTTP retrieval of station reports.

use crate::config::Config;
use crate::envelope::{StationObservation, parse_envelope};
use crate::error::Result;
use reqwest::Client;
use tracing::{debug, info};

/// Client for the METAR data server
#[derive(Debug, Clone)]
pub struct MetarClient {
    client: Client,
    config: Config,
}

impl MetarClient {
    /// Build a client from validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Request URL for a station; the code is upper-cased
    pub fn station_url(&self, station: &str) -> String {
        station_url(&self.config.metar_url, station)
    }

    /// Download the raw XML envelope for a station
    pub async fn fetch_envelope(&self, station: &str) -> Result<String> {
        let url = self.station_url(station);
        info!("Retrieving URL {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;

        debug!("Received XML:\n {}", body);
        Ok(body)
    }

    /// Download and extract a station's observation
    pub async fn fetch_observation(&self, station: &str) -> Result<StationObservation> {
        let body = self.fetch_envelope(station).await?;
        parse_envelope(&body, station, self.config.max_response_bytes)
    }
}

pub fn station_url(base_url: &str, station: &str) -> String {
    format!("{}{}", base_url, station.trim().to_uppercase())
}
