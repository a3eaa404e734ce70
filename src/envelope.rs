//! NOAA ADDS XML envelope extraction.
//!
//! The data server wraps each report in an XML response carrying the raw
//! METAR text plus station position, observation time and flight category.
//! Only the first `METAR` element is used; a response with zero or several
//! results means the identifier did not name exactly one station.

use crate::constants::{FEET_PER_METER, MAX_CATEGORY_LEN};
use crate::error::{MetarError, Result};
use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One station's report as delivered by the data server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationObservation {
    /// Coded METAR body, input to the decoder
    pub raw_text: String,
    pub observation_time: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_m: f64,
    /// VFR, MVFR, IFR or LIFR
    pub flight_category: String,
}

impl StationObservation {
    pub fn elevation_ft(&self) -> f64 {
        meters_to_feet(self.elevation_m)
    }

    /// Observation time as `YYYY-MM-DD HH:MM:SSZ`, empty when unknown
    pub fn observation_time_display(&self) -> String {
        self.observation_time
            .map(|time| time.format("%Y-%m-%d %H:%M:%SZ").to_string())
            .unwrap_or_default()
    }
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

#[derive(Debug, Default)]
struct EnvelopeBuilder {
    num_results: Option<i64>,
    saw_data: bool,
    metar_count: usize,
    raw_text: Option<String>,
    observation_time: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    elevation_m: Option<String>,
    flight_category: Option<String>,
}

impl EnvelopeBuilder {
    fn start_data(&mut self, element: &BytesStart<'_>) -> Result<()> {
        self.saw_data = true;
        let attribute = element
            .try_get_attribute("num_results")
            .map_err(quick_xml::Error::from)?;
        if let Some(attribute) = attribute {
            let value = attribute.unescape_value()?;
            self.num_results = value.trim().parse().ok();
        }
        Ok(())
    }

    fn field_text(&mut self, field: &[u8], text: &str) {
        let slot = match field {
            b"raw_text" => &mut self.raw_text,
            b"observation_time" => &mut self.observation_time,
            b"latitude" => &mut self.latitude,
            b"longitude" => &mut self.longitude,
            b"elevation_m" => &mut self.elevation_m,
            b"flight_category" => &mut self.flight_category,
            _ => return,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }

    fn build(self, station: &str) -> Result<StationObservation> {
        if !self.saw_data {
            return Err(MetarError::envelope_format("response has no data element"));
        }

        let num_results = self.num_results.ok_or_else(|| {
            MetarError::envelope_format("data element has no usable num_results")
        })?;
        debug!("num_results = {}", num_results);
        match num_results {
            0 => return Err(MetarError::station_not_found(station, "no results returned")),
            1 => {}
            n => {
                return Err(MetarError::station_not_found(
                    station,
                    format!("{} results returned", n),
                ));
            }
        }

        let raw_text = self
            .raw_text
            .ok_or_else(|| MetarError::envelope_format("METAR element has no raw_text"))?;

        Ok(StationObservation {
            raw_text: raw_text.trim().to_string(),
            observation_time: self.observation_time.as_deref().and_then(parse_time),
            latitude: parse_number("latitude", self.latitude.as_deref()),
            longitude: parse_number("longitude", self.longitude.as_deref()),
            elevation_m: parse_number("elevation_m", self.elevation_m.as_deref()),
            flight_category: self
                .flight_category
                .map(|category| category.trim().chars().take(MAX_CATEGORY_LEN).collect())
                .unwrap_or_default(),
        })
    }
}

/// Extract the single station observation from a data-server response
pub fn parse_envelope(xml: &str, station: &str, max_bytes: usize) -> Result<StationObservation> {
    debug!("Input XML is {} bytes.", xml.len());
    if xml.len() >= max_bytes {
        return Err(MetarError::station_not_found(
            station,
            format!("response of {} bytes is too large for one station", xml.len()),
        ));
    }

    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut builder = EnvelopeBuilder::default();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => {
                let name = element.name().as_ref().to_vec();
                if name == b"data" {
                    builder.start_data(&element)?;
                } else if name == b"METAR" && path.last().is_some_and(|p| p == b"data") {
                    builder.metar_count += 1;
                }
                path.push(name);
            }
            Event::Empty(element) => {
                if element.name().as_ref() == b"data" {
                    builder.start_data(&element)?;
                }
            }
            Event::Text(text) => {
                if builder.metar_count == 1 && in_first_metar_field(&path) {
                    let value = text.unescape()?;
                    if let Some(field) = path.last() {
                        builder.field_text(field, &value);
                    }
                }
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    builder.build(station)
}

/// True for a direct child of `data/METAR`
fn in_first_metar_field(path: &[Vec<u8>]) -> bool {
    let depth = path.len();
    depth >= 3 && path[depth - 2] == b"METAR" && path[depth - 3] == b"data"
}

fn parse_time(value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value.trim()) {
        Ok(time) => Some(time.with_timezone(&Utc)),
        Err(e) => {
            warn!("Could not parse observation time '{}': {}", value, e);
            None
        }
    }
}

fn parse_number(field: &str, value: Option<&str>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };
    value.trim().parse().unwrap_or_else(|_| {
        warn!("Could not parse {} value: {}", field, value);
        0.0
    })
}
