//! Token patterns for each METAR group
//!
//! The fixed groups use literal patterns. The cloud and phenomenon patterns
//! are assembled from the abbreviation tables so that anything the pattern
//! accepts is guaranteed to have a table entry.

use super::dictionary::{PHENOMENON_CODES, cloud_codes};
use crate::error::Result;
use crate::models::AltitudeDisplay;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const STATION_PATTERN: &str = r"^([A-Z]+)$";
const DAY_TIME_PATTERN: &str = r"^([0-9]{2})([0-9]{4})Z$";
const WIND_PATTERN: &str = r"^(VRB|[0-9]{3})([0-9]{2})(?:G([0-9]+))?(KT)$";
const VISIBILITY_PATTERN: &str = r"^([0-9]+)(SM)?$";
const TEMPERATURE_PATTERN: &str = r"^(M?)([0-9]+)/(M?)([0-9]+)$";
const PRESSURE_PATTERN: &str = r"^([QA])([0-9]+)$";

/// Compiled patterns, shared by every decode call
static PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile().unwrap_or_else(|e| panic!("built-in METAR pattern is invalid: {e}"))
});

/// Process-wide pattern set, compiled on first use
pub fn shared() -> &'static PatternSet {
    &PATTERNS
}

/// One compiled pattern per group
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub station: Regex,
    pub day_time: Regex,
    pub wind: Regex,
    pub visibility: Regex,
    pub temperature: Regex,
    pub pressure: Regex,
    /// Group 1: clear-sky code. Groups 2-4: cover, base, optional modifier.
    pub cloud: Regex,
    /// Group 1: intensity sign. Group 2: concatenated phenomenon codes.
    pub phenomenon: Regex,
}

impl PatternSet {
    /// Compile every group pattern
    pub fn compile() -> Result<Self> {
        let cloud_pattern = build_cloud_pattern();
        let phenomenon_pattern = build_phenomenon_pattern();
        debug!("Cloud pattern: {}", cloud_pattern);
        debug!("Phenomenon pattern: {}", phenomenon_pattern);

        Ok(Self {
            station: Regex::new(STATION_PATTERN)?,
            day_time: Regex::new(DAY_TIME_PATTERN)?,
            wind: Regex::new(WIND_PATTERN)?,
            visibility: Regex::new(VISIBILITY_PATTERN)?,
            temperature: Regex::new(TEMPERATURE_PATTERN)?,
            pressure: Regex::new(PRESSURE_PATTERN)?,
            cloud: Regex::new(&cloud_pattern)?,
            phenomenon: Regex::new(&phenomenon_pattern)?,
        })
    }
}

/// Clear-sky codes alone, or a cover code with a three-digit base and an
/// optional layer-type modifier
pub fn build_cloud_pattern() -> String {
    let clear = alternation(cloud_codes(AltitudeDisplay::Hide));
    let cover = alternation(cloud_codes(AltitudeDisplay::Show));
    let modifier = alternation(cloud_codes(AltitudeDisplay::NotApplicable));

    format!("^(?:({clear})|({cover})([0-9]{{3}})({modifier})?)$")
}

/// Optional `+`/`-` followed by one or more back-to-back phenomenon codes
pub fn build_phenomenon_pattern() -> String {
    let codes = alternation(PHENOMENON_CODES.iter().map(|entry| entry.code));
    format!("^([+-]?)((?:{codes})+)$")
}

fn alternation<'a>(codes: impl Iterator<Item = &'a str>) -> String {
    codes
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}
