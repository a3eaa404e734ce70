//! Decode statistics and result structures
//!
//! Unmatched tokens are expected in METAR text (AUTO, RMK sections, runway
//! groups); the statistics make them visible without failing the decode.

use crate::models::WeatherReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which recognizer consumed a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Station,
    DayTime,
    Wind,
    Visibility,
    Temperature,
    Pressure,
    Cloud,
    Phenomenon,
    CeilingOk,
    Maintenance,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Station => "station",
            TokenKind::DayTime => "day/time",
            TokenKind::Wind => "wind",
            TokenKind::Visibility => "visibility",
            TokenKind::Temperature => "temperature",
            TokenKind::Pressure => "pressure",
            TokenKind::Cloud => "cloud",
            TokenKind::Phenomenon => "phenomenon",
            TokenKind::CeilingOk => "CAVOK",
            TokenKind::Maintenance => "maintenance",
        };
        f.write_str(name)
    }
}

/// Decoded report together with decode statistics
#[derive(Debug, Clone)]
pub struct DecodeResult {
    pub report: WeatherReport,
    pub stats: DecodeStats,
}

/// Per-call token accounting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodeStats {
    /// Number of non-empty tokens seen
    pub total_tokens: usize,

    /// Number of tokens consumed by a recognizer
    pub recognized_tokens: usize,

    /// Tokens no recognizer accepted, in report order
    pub unmatched: Vec<String>,

    /// Recognized token count per group
    pub by_kind: BTreeMap<TokenKind, usize>,
}

impl DecodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, token: &str, kind: Option<TokenKind>) {
        self.total_tokens += 1;
        match kind {
            Some(kind) => {
                self.recognized_tokens += 1;
                *self.by_kind.entry(kind).or_insert(0) += 1;
            }
            None => self.unmatched.push(token.to_string()),
        }
    }

    /// Share of tokens recognized, as a percentage
    pub fn recognition_rate(&self) -> f64 {
        if self.total_tokens == 0 {
            0.0
        } else {
            (self.recognized_tokens as f64 / self.total_tokens as f64) * 100.0
        }
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}
