//! Core data structures for decoded METAR reports.
//!
//! A [`WeatherReport`] is the accumulator filled by one decode call. Singular
//! groups are `Option`s so that "not yet seen" is distinct from a legitimate
//! zero value such as calm wind or 0 degrees.

use crate::constants::{
    COMPASS_POINTS, HECTOPASCAL_DECIMALS, INCHES_OF_MERCURY_DECIMALS, VARIABLE_WIND_DIRECTION,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded METAR body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// ICAO station identifier
    pub station: Option<String>,

    /// Day of month and UTC time of the observation
    pub observed: Option<ObservationTime>,

    pub wind: Option<Wind>,

    pub visibility: Option<Visibility>,

    pub temperatures: Option<Temperatures>,

    pub pressure: Option<Pressure>,

    /// Set by a trailing `$` group
    pub maintenance_required: bool,

    /// Cloud layers in report order
    pub clouds: Vec<CloudLayer>,

    /// Present-weather descriptions in report order
    pub phenomena: Vec<String>,
}

impl WeatherReport {
    /// True when no group at all was recognized
    pub fn is_empty(&self) -> bool {
        self.station.is_none()
            && self.observed.is_none()
            && self.wind.is_none()
            && self.visibility.is_none()
            && self.temperatures.is_none()
            && self.pressure.is_none()
            && !self.maintenance_required
            && self.clouds.is_empty()
            && self.phenomena.is_empty()
    }
}

/// `ddhhmmZ` group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationTime {
    pub day: u32,
    /// HHMM as a single integer, e.g. 1756
    pub time: u32,
}

impl ObservationTime {
    pub fn hour(&self) -> u32 {
        self.time / 100
    }

    pub fn minute(&self) -> u32 {
        self.time % 100
    }
}

/// Wind direction, either a true bearing or variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    Variable,
    Degrees(u32),
}

impl WindDirection {
    /// Numeric form where variable winds are `-1`
    pub fn as_degrees(&self) -> i32 {
        match self {
            WindDirection::Variable => VARIABLE_WIND_DIRECTION,
            WindDirection::Degrees(degrees) => *degrees as i32,
        }
    }

    /// Sixteen-point compass name, `None` for variable winds
    pub fn compass_point(&self) -> Option<&'static str> {
        match self {
            WindDirection::Variable => None,
            WindDirection::Degrees(degrees) => {
                let index = ((degrees * 4 + 45) / 90) % 16;
                Some(COMPASS_POINTS[index as usize])
            }
        }
    }
}

impl Default for WindDirection {
    fn default() -> Self {
        WindDirection::Degrees(0)
    }
}

/// Wind group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: u32,
    /// Equals `speed` when the report carries no gust
    pub gust: u32,
    pub unit: String,
}

/// Unit of a visibility group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityUnit {
    StatuteMiles,
    /// No suffix in the report
    Meters,
}

impl VisibilityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityUnit::StatuteMiles => "SM",
            VisibilityUnit::Meters => "M",
        }
    }
}

impl fmt::Display for VisibilityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub value: u32,
    pub unit: VisibilityUnit,
}

/// Temperature and dewpoint in whole degrees Celsius
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperatures {
    pub temperature: i32,
    pub dewpoint: i32,
}

/// Unit of a pressure group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Hectopascals,
    InchesOfMercury,
    Unknown,
}

impl PressureUnit {
    /// Unit implied by the group's leading letter
    pub fn from_prefix(prefix: char) -> Self {
        match prefix {
            'Q' => PressureUnit::Hectopascals,
            'A' => PressureUnit::InchesOfMercury,
            _ => PressureUnit::Unknown,
        }
    }

    /// Implied decimal places of the stored integer
    pub fn decimals(&self) -> u32 {
        match self {
            PressureUnit::InchesOfMercury => INCHES_OF_MERCURY_DECIMALS,
            PressureUnit::Hectopascals | PressureUnit::Unknown => HECTOPASCAL_DECIMALS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PressureUnit::Hectopascals => "hPa",
            PressureUnit::InchesOfMercury => "\"Hg",
            PressureUnit::Unknown => "Unkn",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pressure (QNH) group. `value` is stored undivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pressure {
    pub value: u32,
    pub unit: PressureUnit,
    pub decimals: u32,
}

impl Pressure {
    pub fn new(value: u32, unit: PressureUnit) -> Self {
        Self {
            value,
            unit,
            decimals: unit.decimals(),
        }
    }

    /// Value with the implied decimal places applied, e.g. 2992 -> 29.92
    pub fn scaled(&self) -> f64 {
        f64::from(self.value) / 10f64.powi(self.decimals as i32)
    }
}

/// Whether a cloud entry's base altitude is meaningful for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltitudeDisplay {
    /// Cover amounts with a reported base (FEW, BKN, ...)
    Show,
    /// Clear-sky groups (SKC, NCD, ...)
    Hide,
    /// Layer-type modifiers (CB, TCU, ...)
    NotApplicable,
}

/// One cloud group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayer {
    /// Cover amount description
    pub cover: String,

    /// Base in hundreds of feet; `None` for clear-sky groups
    pub altitude: Option<u32>,

    pub altitude_display: AltitudeDisplay,

    /// Layer-type description, empty when absent
    pub modifier: String,
}

impl CloudLayer {
    pub fn shows_altitude(&self) -> bool {
        self.altitude_display == AltitudeDisplay::Show
    }

    /// Base in feet, when known
    pub fn altitude_ft(&self) -> Option<u32> {
        self.altitude.map(|hundreds| hundreds * 100)
    }
}
