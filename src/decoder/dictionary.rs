//! Abbreviation tables for cloud and present-weather groups
//!
//! Both tables are process-wide constants. Lookups are exact matches on the
//! code captured by the structural pattern, so table order carries no meaning
//! for decoding; it only fixes the order of alternatives in built patterns.

use crate::models::AltitudeDisplay;

/// Cloud cover, clear-sky or layer-type abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudAbbreviation {
    pub code: &'static str,
    pub description: &'static str,
    pub altitude_display: AltitudeDisplay,
}

/// Two-letter present-weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhenomenonCode {
    pub code: &'static str,
    pub description: &'static str,
}

const fn cloud(
    code: &'static str,
    description: &'static str,
    altitude_display: AltitudeDisplay,
) -> CloudAbbreviation {
    CloudAbbreviation {
        code,
        description,
        altitude_display,
    }
}

const fn phenomenon(code: &'static str, description: &'static str) -> PhenomenonCode {
    PhenomenonCode { code, description }
}

pub static CLOUD_ABBREVIATIONS: [CloudAbbreviation; 15] = [
    cloud("SKC", "Sky Clear (no clouds within sensors range)", AltitudeDisplay::Hide),
    cloud("CLR", "Sky Clear Below 12000ft", AltitudeDisplay::Hide),
    cloud("NSC", "No Significant Clouds below 5000ft/1500m AGL", AltitudeDisplay::Hide),
    cloud("NCD", "No Clouds Detected below 5000ft/1500m AGL", AltitudeDisplay::Hide),
    cloud("FEW", "Few clouds", AltitudeDisplay::Show),
    cloud("SCT", "Scattered clouds", AltitudeDisplay::Show),
    cloud("BKN", "Broken clouds", AltitudeDisplay::Show),
    cloud("OVC", "Overcast", AltitudeDisplay::Show),
    cloud("VV", "Vertical Visibility", AltitudeDisplay::Show),
    cloud("TCU", ", Towering Cumulus clouds in vicinity", AltitudeDisplay::NotApplicable),
    cloud("CU", ", Cumulus clouds in vicinity", AltitudeDisplay::NotApplicable),
    cloud("CB", ", Cumulonimbus clouds in vicinity", AltitudeDisplay::NotApplicable),
    cloud(
        "CBMAM",
        ", Cumulonimbus Mammatus in vicinity (expect turbulent air)",
        AltitudeDisplay::NotApplicable,
    ),
    cloud(
        "ACC",
        ", Altocumulus Castellatus (medium layer_altitude, vigorous instability)",
        AltitudeDisplay::NotApplicable,
    ),
    cloud("CLD", ", Standing lenticular or rotor clouds", AltitudeDisplay::NotApplicable),
];

// Descriptors (MI..FZ) precede precipitation, obscuration and other codes,
// matching the order they appear in a group.
pub static PHENOMENON_CODES: [PhenomenonCode; 31] = [
    phenomenon("MI", "Shallow"),
    phenomenon("BL", "Blowing"),
    phenomenon("BC", "Patches"),
    phenomenon("SH", "Showers"),
    phenomenon("PR", "Partials"),
    phenomenon("DR", "Drifting"),
    phenomenon("TS", "Thunderstorm"),
    phenomenon("FZ", "Freezing"),
    phenomenon("DZ", "Drizzle"),
    phenomenon("IC", "Ice Crystals"),
    phenomenon("UP", "Unknown Precipitation"),
    phenomenon("RA", "Rain"),
    phenomenon("PL", "Ice Pellets"),
    phenomenon("SN", "Snow"),
    phenomenon("GR", "Hail"),
    phenomenon("SG", "Snow Grains"),
    phenomenon("GS", "Small hail/snow pellets"),
    phenomenon("BR", "Mist"),
    phenomenon("SA", "Sand"),
    phenomenon("FU", "Smoke"),
    phenomenon("HZ", "Haze"),
    phenomenon("FG", "Fog"),
    phenomenon("VA", "Volcanic Ash"),
    phenomenon("PY", "Spray"),
    phenomenon("DU", "Widespread Dust"),
    phenomenon("SQ", "Squall"),
    phenomenon("FC", "Funnel Cloud"),
    phenomenon("SS", "Sand storm"),
    phenomenon("DS", "Dust storm"),
    phenomenon("PO", "Well developed dust/sand swirls"),
    phenomenon("VC", "Vicinity"),
];

/// Width of every phenomenon code
pub const PHENOMENON_CODE_LEN: usize = 2;

/// Exact-match lookup in the cloud table
pub fn lookup_cloud(code: &str) -> Option<&'static CloudAbbreviation> {
    CLOUD_ABBREVIATIONS.iter().find(|entry| entry.code == code)
}

/// Exact-match lookup in the phenomenon table
pub fn lookup_phenomenon(code: &str) -> Option<&'static PhenomenonCode> {
    PHENOMENON_CODES.iter().find(|entry| entry.code == code)
}

/// Cloud codes with the given display policy, in table order
pub fn cloud_codes(policy: AltitudeDisplay) -> impl Iterator<Item = &'static str> {
    CLOUD_ABBREVIATIONS
        .iter()
        .filter(move |entry| entry.altitude_display == policy)
        .map(|entry| entry.code)
}
