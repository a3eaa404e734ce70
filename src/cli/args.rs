//! Command-line argument definitions for the METAR tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::Config;
use crate::error::Result;
use clap::Parser;

/// Print meteorological reports (METARs) for one or more stations
///
/// Retrieves the latest report for each ICAO airport code and optionally
/// decodes it into a labelled, human-readable block.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar",
    version,
    about = "Print meteorological reports (METARs) for STATIONs",
    long_about = "Print meteorological reports (METARs) for STATIONs, where STATIONs are one or \
                  more ICAO airport codes (e.g. ksfo). Reports are retrieved from the NOAA \
                  aviation weather data server; set METARURL to use a different server.",
    after_help = "Example: metar -d ehgr"
)]
pub struct Args {
    /// ICAO airport codes
    #[arg(value_name = "STATION", required_unless_present = "raw")]
    pub stations: Vec<String>,

    /// Decode the report
    #[arg(short = 'd', long = "decode")]
    pub decode: bool,

    /// Print the location of the station
    #[arg(short = 'l', long = "location")]
    pub location: bool,

    /// Print the date and time of the observation
    #[arg(short = 't', long = "time")]
    pub datetime: bool,

    /// Print the flight category (VFR, MVFR, IFR, LIFR)
    #[arg(short = 'c', long = "category")]
    pub category: bool,

    /// Print decoded reports as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Decode this report text instead of retrieving reports
    #[arg(long = "raw", value_name = "METAR", conflicts_with = "stations")]
    pub raw: Option<String>,

    /// Base URL the station code is appended to (overrides METARURL)
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the log level string for tracing configuration
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Environment configuration with command-line overrides applied
    pub fn build_config(&self) -> Result<Config> {
        let mut config = Config::from_env();
        if let Some(url) = &self.url {
            config = config.with_metar_url(url.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout_secs(secs);
        }
        config.validate()?;
        Ok(config)
    }

    /// Whether any decoded output was requested
    pub fn wants_decoded(&self) -> bool {
        self.decode || self.json
    }
}
