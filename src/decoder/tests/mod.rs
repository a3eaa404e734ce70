//! Test suite for the METAR decoder
//!
//! Tests are organized by component:
//! - `dictionary_tests` - Table contents and exact-match lookups
//! - `recognizer_tests` - Individual group recognizers
//! - `parser_tests` - Token ordering, gating and accumulation
//! - `stats_tests` - Token accounting

pub mod dictionary_tests;
pub mod recognizer_tests;

use crate::decoder::MetarDecoder;
use crate::models::WeatherReport;

/// US-style report with gusts, a CB layer and inches of mercury
pub const KSFO_REPORT: &str =
    "KSFO 191756Z 24015G25KT 10SM -SHRA FEW008 BKN035CB OVC250 18/12 A2992";

/// European report with CAVOK and hectopascals
pub const EHAM_REPORT: &str = "EHAM 191755Z VRB03KT CAVOK M05/M10 Q1013 NOSIG";

/// Automated report with a maintenance indicator and remarks
pub const KMSP_REPORT: &str =
    "KMSP 191753Z 31012KT 9999 +TSRA BR SCT020TCU 21/19 A2985 RMK AO2 SLP106 $\n";

/// Decode with the shared pattern set
pub fn decode(text: &str) -> WeatherReport {
    MetarDecoder::new().decode(text)
}
