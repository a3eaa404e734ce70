//! METAR body decoder
//!
//! This module turns the coded, space-delimited METAR body into a
//! [`WeatherReport`](crate::models::WeatherReport). Decoding is tolerant:
//! unknown groups are skipped and a report with nothing recognizable still
//! yields an (empty) record.
//!
//! ## Architecture
//!
//! - [`dictionary`] - Cloud and present-weather abbreviation tables
//! - [`patterns`] - Group patterns, including those built from the tables
//! - [`recognizers`] - One recognizer per group
//! - [`parser`] - Tokenizer and recognizer priority order
//! - [`stats`] - Token accounting and result structures
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::decoder::MetarDecoder;
//!
//! let decoder = MetarDecoder::new();
//! let report = decoder.decode("KSFO 191756Z 24015G25KT 10SM BKN035CB 18/12 A2992");
//!
//! assert_eq!(report.station.as_deref(), Some("KSFO"));
//! assert_eq!(report.clouds.len(), 1);
//! ```

pub mod dictionary;
pub mod parser;
pub mod patterns;
pub mod recognizers;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use dictionary::{CloudAbbreviation, PhenomenonCode, lookup_cloud, lookup_phenomenon};
pub use parser::{MetarDecoder, tokenize};
pub use patterns::PatternSet;
pub use stats::{DecodeResult, DecodeStats, TokenKind};
