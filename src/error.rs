//! Error handling for METAR retrieval and decoding.
//!
//! Decoding itself is tolerant and never surfaces an error to the caller;
//! these variants cover the envelope, network and configuration layers plus
//! the defects that can only arise from the built-in tables and patterns.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{station} is not a valid ICAO airport identifier: {reason}")]
    StationNotFound { station: String, reason: String },

    #[error("Invalid METAR envelope: {reason}")]
    EnvelopeFormat { reason: String },

    #[error("Built-in pattern failed to compile: {0}")]
    PatternCompilation(#[from] regex::Error),

    #[error("No dictionary entry for code '{code}'")]
    DictionaryMiss { code: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl MetarError {
    /// Create a station not found error
    pub fn station_not_found(station: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StationNotFound {
            station: station.into(),
            reason: reason.into(),
        }
    }

    /// Create an envelope format error
    pub fn envelope_format(reason: impl Into<String>) -> Self {
        Self::EnvelopeFormat {
            reason: reason.into(),
        }
    }

    /// Create a dictionary miss error
    pub fn dictionary_miss(code: impl Into<String>) -> Self {
        Self::DictionaryMiss { code: code.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the upstream source had no single record for the station
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StationNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, MetarError>;
