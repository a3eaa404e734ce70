//! Application constants for the METAR decoder
//!
//! This module contains the default data source, field limits and the
//! sentinel values shared by the decoder, renderer and CLI.

// =============================================================================
// Data Source
// =============================================================================

/// Default NOAA ADDS endpoint; the ICAO station code is appended verbatim
pub const DEFAULT_METAR_URL: &str = "https://www.aviationweather.gov/adds/dataserver_current/httpparam?datasource=metars&requestType=retrieve&format=xml&mostRecentForEachStation=constraint&hoursBeforeNow=1.25&stationString=";

/// Environment variable that overrides the base URL
pub const METAR_URL_ENV: &str = "METARURL";

/// Environment variable that overrides the request timeout
pub const METAR_TIMEOUT_ENV: &str = "METAR_TIMEOUT_SECS";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Largest envelope accepted for a single station.
///
/// A real single-station response is a little over 1K. Short prefixes such as
/// "ED" make the server return every matching station, which blows past this.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 4096;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("metar_decoder/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Field Limits
// =============================================================================

/// Maximum station identifier length kept from a report
pub const MAX_STATION_LEN: usize = 9;

/// Maximum unit string length kept from a report
pub const MAX_UNIT_LEN: usize = 4;

/// Maximum flight category length kept from an envelope
pub const MAX_CATEGORY_LEN: usize = 7;

// =============================================================================
// Sentinels and Conversions
// =============================================================================

/// Wind direction value used for variable winds in numeric exports
pub const VARIABLE_WIND_DIRECTION: i32 = -1;

/// Implied decimal places for hectopascal pressure groups
pub const HECTOPASCAL_DECIMALS: u32 = 0;

/// Implied decimal places for inches-of-mercury pressure groups
pub const INCHES_OF_MERCURY_DECIMALS: u32 = 2;

/// Phenomenon text for the CAVOK group
pub const CAVOK_DESCRIPTION: &str = "Ceiling and visibility OK";

/// Metres to feet
pub const FEET_PER_METER: f64 = 3.280_84;

/// Sixteen-point compass names, clockwise from north
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];
