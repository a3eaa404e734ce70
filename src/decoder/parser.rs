//! Token decoder driving the field recognizers
//!
//! A report is split into space-separated tokens and every token is offered
//! to the recognizers in a fixed priority order. Singular groups are only
//! considered while still unset, so the first match wins. Cloud and
//! phenomenon groups accumulate.

use super::patterns::{self, PatternSet};
use super::recognizers::{
    recognize_cavok, recognize_cloud, recognize_day_time, recognize_maintenance,
    recognize_phenomenon, recognize_pressure, recognize_station, recognize_temperatures,
    recognize_visibility, recognize_wind,
};
use super::stats::{DecodeResult, DecodeStats, TokenKind};
use crate::models::WeatherReport;
use tracing::{debug, error};

/// METAR body decoder
#[derive(Debug, Clone, Copy)]
pub struct MetarDecoder<'p> {
    patterns: &'p PatternSet,
}

impl MetarDecoder<'static> {
    /// Decoder using the process-wide compiled patterns
    pub fn new() -> Self {
        Self {
            patterns: patterns::shared(),
        }
    }
}

impl Default for MetarDecoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> MetarDecoder<'p> {
    /// Decoder using a caller-compiled pattern set
    pub fn with_patterns(patterns: &'p PatternSet) -> Self {
        Self { patterns }
    }

    /// Decode a report. Unrecognized tokens are skipped.
    pub fn decode(&self, report_text: &str) -> WeatherReport {
        self.decode_with_stats(report_text).report
    }

    /// Decode a report and account for every token
    pub fn decode_with_stats(&self, report_text: &str) -> DecodeResult {
        let mut report = WeatherReport::default();
        let mut stats = DecodeStats::new();

        for token in tokenize(report_text) {
            let kind = self.analyse_token(token, &mut report);
            stats.record(token, kind);
        }

        debug!(
            "Decoded {} of {} tokens ({:.0}%)",
            stats.recognized_tokens,
            stats.total_tokens,
            stats.recognition_rate()
        );

        DecodeResult { report, stats }
    }

    /// Offer one token to the recognizers, writing any match into `report`
    fn analyse_token(&self, token: &str, report: &mut WeatherReport) -> Option<TokenKind> {
        let patterns = self.patterns;
        debug!("Parsing token `{}`", token);

        if report.station.is_none() {
            if let Some(station) = recognize_station(patterns, token) {
                debug!("   Found station {}", station);
                report.station = Some(station);
                return Some(TokenKind::Station);
            }
        }

        if report.observed.is_none() {
            if let Some(observed) = recognize_day_time(patterns, token) {
                debug!("   Found Day/Time {}/{}", observed.day, observed.time);
                report.observed = Some(observed);
                return Some(TokenKind::DayTime);
            }
        }

        if report.wind.is_none() {
            if let Some(wind) = recognize_wind(patterns, token) {
                debug!(
                    "   Found Winddir/str/gust/unit {}/{}/{}/{}",
                    wind.direction.as_degrees(),
                    wind.speed,
                    wind.gust,
                    wind.unit
                );
                report.wind = Some(wind);
                return Some(TokenKind::Wind);
            }
        }

        if report.visibility.is_none() {
            if let Some(visibility) = recognize_visibility(patterns, token) {
                debug!(
                    "   Visibility range/unit {}/{}",
                    visibility.value, visibility.unit
                );
                report.visibility = Some(visibility);
                return Some(TokenKind::Visibility);
            }
        }

        if report.temperatures.is_none() {
            if let Some(temperatures) = recognize_temperatures(patterns, token) {
                debug!(
                    "   Temp/dewpoint {}/{}",
                    temperatures.temperature, temperatures.dewpoint
                );
                report.temperatures = Some(temperatures);
                return Some(TokenKind::Temperature);
            }
        }

        if report.pressure.is_none() {
            if let Some(pressure) = recognize_pressure(patterns, token) {
                debug!("   Pressure/unit {}/{}", pressure.value, pressure.unit);
                report.pressure = Some(pressure);
                return Some(TokenKind::Pressure);
            }
        }

        // multiple cloud layers possible
        match recognize_cloud(patterns, token) {
            Ok(Some(layer)) => {
                debug!(
                    "   Cloud cover/alt {}/{:?}",
                    layer.cover,
                    layer.altitude_ft()
                );
                report.clouds.push(layer);
                return Some(TokenKind::Cloud);
            }
            Ok(None) => {}
            Err(e) => {
                error!("Cloud group `{}` matched but did not decode: {}", token, e);
                return None;
            }
        }

        // CAVOK is longer than the two-letter phenomenon codes
        let cavok = recognize_cavok(token);
        if let Some(description) = cavok {
            report.phenomena.push(description.to_string());
        }

        match recognize_phenomenon(patterns, token) {
            Ok(Some(phenomenon)) => {
                debug!("   Phenomena {}", phenomenon);
                report.phenomena.push(phenomenon);
                return Some(TokenKind::Phenomenon);
            }
            Ok(None) => {}
            Err(e) => {
                error!(
                    "Phenomenon group `{}` matched but did not decode: {}",
                    token, e
                );
            }
        }

        if recognize_maintenance(token) {
            debug!("   Maintenance needed");
            report.maintenance_required = true;
            return Some(TokenKind::Maintenance);
        }

        if cavok.is_some() {
            debug!("   Ceiling and visibility OK");
            return Some(TokenKind::CeilingOk);
        }

        debug!("   Unmatched token = {}", token);
        None
    }
}

/// Split a report into non-empty tokens after dropping trailing line ends
pub fn tokenize(report_text: &str) -> impl Iterator<Item = &str> {
    report_text
        .trim_end_matches(['\n', '\r'])
        .split(' ')
        .filter(|token| !token.is_empty())
}
