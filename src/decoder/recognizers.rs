//! Field recognizers for individual METAR groups
//!
//! Each recognizer matches one token against its group pattern and returns the
//! decoded value, or `None` when the token is not that group. Gating (first
//! match wins) is the driver's job, not the recognizers'.

use super::dictionary::{PHENOMENON_CODE_LEN, lookup_cloud, lookup_phenomenon};
use super::patterns::PatternSet;
use crate::constants::{CAVOK_DESCRIPTION, MAX_STATION_LEN, MAX_UNIT_LEN};
use crate::error::{MetarError, Result};
use crate::models::{
    CloudLayer, ObservationTime, Pressure, PressureUnit, Temperatures, Visibility, VisibilityUnit,
    Wind, WindDirection,
};
use regex::Captures;

/// Alphabetic-only token, taken as the ICAO identifier
pub fn recognize_station(patterns: &PatternSet, token: &str) -> Option<String> {
    let captures = patterns.station.captures(token)?;
    Some(truncate(&captures[1], MAX_STATION_LEN))
}

/// `ddhhmmZ`
pub fn recognize_day_time(patterns: &PatternSet, token: &str) -> Option<ObservationTime> {
    let captures = patterns.day_time.captures(token)?;
    Some(ObservationTime {
        day: parse_group(&captures, 1)?,
        time: parse_group(&captures, 2)?,
    })
}

/// `dddffKT`, `dddffGggKT` or `VRBffKT`
pub fn recognize_wind(patterns: &PatternSet, token: &str) -> Option<Wind> {
    let captures = patterns.wind.captures(token)?;

    let direction = match &captures[1] {
        "VRB" => WindDirection::Variable,
        degrees => WindDirection::Degrees(degrees.parse().ok()?),
    };
    let speed: u32 = parse_group(&captures, 2)?;
    let gust = match captures.get(3) {
        Some(gust) => gust.as_str().parse().ok()?,
        None => speed,
    };

    Some(Wind {
        direction,
        speed,
        gust,
        unit: truncate(&captures[4], MAX_UNIT_LEN),
    })
}

/// Bare digits (metres) or digits with `SM`
pub fn recognize_visibility(patterns: &PatternSet, token: &str) -> Option<Visibility> {
    let captures = patterns.visibility.captures(token)?;
    let unit = if captures.get(2).is_some() {
        VisibilityUnit::StatuteMiles
    } else {
        VisibilityUnit::Meters
    };

    Some(Visibility {
        value: parse_group(&captures, 1)?,
        unit,
    })
}

/// `TT/DD` where either side may carry a leading `M` for minus
pub fn recognize_temperatures(patterns: &PatternSet, token: &str) -> Option<Temperatures> {
    let captures = patterns.temperature.captures(token)?;
    Some(Temperatures {
        temperature: signed(&captures, 1, 2)?,
        dewpoint: signed(&captures, 3, 4)?,
    })
}

/// `Qpppp` (hPa) or `Apppp` (inHg, two implied decimals)
pub fn recognize_pressure(patterns: &PatternSet, token: &str) -> Option<Pressure> {
    let captures = patterns.pressure.captures(token)?;
    let unit = captures[1]
        .chars()
        .next()
        .map_or(PressureUnit::Unknown, PressureUnit::from_prefix);

    Some(Pressure::new(parse_group(&captures, 2)?, unit))
}

/// Clear-sky group, or cover + base + optional layer type
pub fn recognize_cloud(patterns: &PatternSet, token: &str) -> Result<Option<CloudLayer>> {
    let Some(captures) = patterns.cloud.captures(token) else {
        return Ok(None);
    };

    if let Some(clear) = captures.get(1) {
        let entry = cloud_entry(clear.as_str())?;
        return Ok(Some(CloudLayer {
            cover: entry.description.to_string(),
            altitude: None,
            altitude_display: entry.altitude_display,
            modifier: String::new(),
        }));
    }

    let Some(cover) = captures.get(2) else {
        return Ok(None);
    };
    let entry = cloud_entry(cover.as_str())?;
    let Some(altitude) = parse_group(&captures, 3) else {
        return Ok(None);
    };
    let modifier = match captures.get(4) {
        Some(modifier) => cloud_entry(modifier.as_str())?.description.to_string(),
        None => String::new(),
    };

    Ok(Some(CloudLayer {
        cover: entry.description.to_string(),
        altitude: Some(altitude),
        altitude_display: entry.altitude_display,
        modifier,
    }))
}

/// Optional intensity sign followed by concatenated two-letter codes
pub fn recognize_phenomenon(patterns: &PatternSet, token: &str) -> Result<Option<String>> {
    let Some(captures) = patterns.phenomenon.captures(token) else {
        return Ok(None);
    };

    let mut words: Vec<&str> = Vec::new();
    match &captures[1] {
        "-" => words.push("Light"),
        "+" => words.push("Heavy"),
        _ => {}
    }

    let codes = &captures[2];
    for start in (0..codes.len()).step_by(PHENOMENON_CODE_LEN) {
        let code = codes
            .get(start..start + PHENOMENON_CODE_LEN)
            .ok_or_else(|| MetarError::dictionary_miss(&codes[start..]))?;
        let entry = lookup_phenomenon(code).ok_or_else(|| MetarError::dictionary_miss(code))?;
        words.push(entry.description);
    }

    Ok(Some(words.join(" ")))
}

/// `CAVOK` anywhere in the token
pub fn recognize_cavok(token: &str) -> Option<&'static str> {
    token.contains("CAVOK").then_some(CAVOK_DESCRIPTION)
}

/// `$` maintenance indicator
pub fn recognize_maintenance(token: &str) -> bool {
    token.starts_with('$')
}

fn cloud_entry(code: &str) -> Result<&'static super::dictionary::CloudAbbreviation> {
    lookup_cloud(code).ok_or_else(|| MetarError::dictionary_miss(code))
}

fn parse_group(captures: &Captures<'_>, index: usize) -> Option<u32> {
    captures.get(index)?.as_str().parse().ok()
}

fn signed(captures: &Captures<'_>, sign: usize, digits: usize) -> Option<i32> {
    let value: i32 = captures.get(digits)?.as_str().parse().ok()?;
    match captures.get(sign).map(|m| m.as_str()) {
        Some("M") => Some(-value),
        _ => Some(value),
    }
}

fn truncate(value: &str, max_len: usize) -> String {
    value.chars().take(max_len).collect()
}
