//! METAR Decoder Library
//!
//! A Rust library for turning METAR aviation weather reports into structured
//! records.
//!
//! This library provides tools for:
//! - Decoding the coded METAR body (station, time, wind, visibility,
//!   temperature, pressure, cloud layers, present weather, maintenance flag)
//! - Extracting a station's report from the NOAA data-server XML envelope
//! - Retrieving reports over HTTP
//! - Rendering decoded reports as labelled text

pub mod config;
pub mod constants;
pub mod decoder;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod models;
pub mod render;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use decoder::{DecodeResult, DecodeStats, MetarDecoder, TokenKind};
pub use envelope::{StationObservation, parse_envelope};
pub use error::{MetarError, Result};
pub use fetch::MetarClient;
pub use models::{
    AltitudeDisplay, CloudLayer, ObservationTime, Pressure, PressureUnit, Temperatures, Visibility,
    VisibilityUnit, WeatherReport, Wind, WindDirection,
};
pub use render::render_report;

/// Decode a METAR body with the shared pattern set
///
/// ```rust
/// let report = metar_decoder::decode("EHAM 191755Z VRB03KT CAVOK M05/M10 Q1013");
/// assert_eq!(report.temperatures.unwrap().dewpoint, -10);
/// assert_eq!(report.phenomena, vec!["Ceiling and visibility OK"]);
/// ```
pub fn decode(report_text: &str) -> WeatherReport {
    MetarDecoder::new().decode(report_text)
}
