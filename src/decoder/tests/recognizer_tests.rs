//! Tests for the individual group recognizers

use crate::decoder::patterns::shared;
use crate::decoder::recognizers::*;
use crate::models::{AltitudeDisplay, PressureUnit, VisibilityUnit, WindDirection};

#[test]
fn test_station() {
    let patterns = shared();
    assert_eq!(recognize_station(patterns, "KSFO").as_deref(), Some("KSFO"));
    assert_eq!(recognize_station(patterns, "ksfo"), None);
    assert_eq!(recognize_station(patterns, "K5FO"), None);
    assert_eq!(
        recognize_station(patterns, "ABCDEFGHIJKL").as_deref(),
        Some("ABCDEFGHI")
    );
}

#[test]
fn test_day_time() {
    let observed = recognize_day_time(shared(), "191756Z").unwrap();
    assert_eq!(observed.day, 19);
    assert_eq!(observed.time, 1756);

    assert!(recognize_day_time(shared(), "191756").is_none());
    assert!(recognize_day_time(shared(), "1917560Z").is_none());
}

#[test]
fn test_variable_wind() {
    let wind = recognize_wind(shared(), "VRB03KT").unwrap();
    assert_eq!(wind.direction, WindDirection::Variable);
    assert_eq!(wind.direction.as_degrees(), -1);
    assert_eq!(wind.speed, 3);
    assert_eq!(wind.gust, 3);
    assert_eq!(wind.unit, "KT");
}

#[test]
fn test_gusting_wind() {
    let wind = recognize_wind(shared(), "24015G25KT").unwrap();
    assert_eq!(wind.direction, WindDirection::Degrees(240));
    assert_eq!(wind.speed, 15);
    assert_eq!(wind.gust, 25);
}

#[test]
fn test_calm_wind() {
    let wind = recognize_wind(shared(), "00000KT").unwrap();
    assert_eq!(wind.direction, WindDirection::Degrees(0));
    assert_eq!(wind.speed, 0);
    assert_eq!(wind.gust, 0);
}

#[test]
fn test_wind_rejects_other_units() {
    assert!(recognize_wind(shared(), "24015MPS").is_none());
    assert!(recognize_wind(shared(), "240V300").is_none());
}

#[test]
fn test_visibility() {
    let miles = recognize_visibility(shared(), "10SM").unwrap();
    assert_eq!(miles.value, 10);
    assert_eq!(miles.unit, VisibilityUnit::StatuteMiles);

    let meters = recognize_visibility(shared(), "9999").unwrap();
    assert_eq!(meters.value, 9999);
    assert_eq!(meters.unit, VisibilityUnit::Meters);
    assert_eq!(meters.unit.as_str(), "M");
}

#[test]
fn test_visibility_overflow_is_not_a_match() {
    assert!(recognize_visibility(shared(), "99999999999999999999").is_none());
}

#[test]
fn test_temperatures() {
    let both_negative = recognize_temperatures(shared(), "M05/M10").unwrap();
    assert_eq!(both_negative.temperature, -5);
    assert_eq!(both_negative.dewpoint, -10);

    let mixed = recognize_temperatures(shared(), "05/M10").unwrap();
    assert_eq!(mixed.temperature, 5);
    assert_eq!(mixed.dewpoint, -10);

    assert!(recognize_temperatures(shared(), "05/").is_none());
}

#[test]
fn test_pressure() {
    let hpa = recognize_pressure(shared(), "Q1013").unwrap();
    assert_eq!(hpa.value, 1013);
    assert_eq!(hpa.unit, PressureUnit::Hectopascals);
    assert_eq!(hpa.decimals, 0);

    let inches = recognize_pressure(shared(), "A2992").unwrap();
    assert_eq!(inches.value, 2992);
    assert_eq!(inches.unit, PressureUnit::InchesOfMercury);
    assert_eq!(inches.decimals, 2);
    assert_eq!(format!("{:.2}", inches.scaled()), "29.92");

    assert!(recognize_pressure(shared(), "B1013").is_none());
}

#[test]
fn test_cloud_layer_with_modifier() {
    let layer = recognize_cloud(shared(), "BKN035CB").unwrap().unwrap();
    assert_eq!(layer.cover, "Broken clouds");
    assert_eq!(layer.altitude, Some(35));
    assert_eq!(layer.altitude_display, AltitudeDisplay::Show);
    assert_eq!(layer.modifier, ", Cumulonimbus clouds in vicinity");
}

#[test]
fn test_cloud_layer_mammatus() {
    let layer = recognize_cloud(shared(), "OVC010CBMAM").unwrap().unwrap();
    assert_eq!(
        layer.modifier,
        ", Cumulonimbus Mammatus in vicinity (expect turbulent air)"
    );
}

#[test]
fn test_clear_sky() {
    let layer = recognize_cloud(shared(), "SKC").unwrap().unwrap();
    assert_eq!(layer.cover, "Sky Clear (no clouds within sensors range)");
    assert_eq!(layer.altitude, None);
    assert_eq!(layer.altitude_display, AltitudeDisplay::Hide);
    assert!(layer.modifier.is_empty());
}

#[test]
fn test_vertical_visibility() {
    let layer = recognize_cloud(shared(), "VV002").unwrap().unwrap();
    assert_eq!(layer.cover, "Vertical Visibility");
    assert_eq!(layer.altitude_ft(), Some(200));
    assert!(layer.modifier.is_empty());
}

#[test]
fn test_cloud_rejects_malformed() {
    assert!(recognize_cloud(shared(), "BKN35").unwrap().is_none());
    assert!(recognize_cloud(shared(), "SKC010").unwrap().is_none());
    assert!(recognize_cloud(shared(), "BKN035XX").unwrap().is_none());
}

#[test]
fn test_phenomenon_with_intensity() {
    assert_eq!(
        recognize_phenomenon(shared(), "-SHRA").unwrap().as_deref(),
        Some("Light Showers Rain")
    );
    assert_eq!(
        recognize_phenomenon(shared(), "+TSRA").unwrap().as_deref(),
        Some("Heavy Thunderstorm Rain")
    );
    assert_eq!(
        recognize_phenomenon(shared(), "BR").unwrap().as_deref(),
        Some("Mist")
    );
    assert_eq!(
        recognize_phenomenon(shared(), "VCFG").unwrap().as_deref(),
        Some("Vicinity Fog")
    );
}

#[test]
fn test_phenomenon_rejects_unknown_codes() {
    assert_eq!(recognize_phenomenon(shared(), "RMK").unwrap(), None);
    assert_eq!(recognize_phenomenon(shared(), "NOSIG").unwrap(), None);
}

#[test]
fn test_cavok_and_maintenance() {
    assert_eq!(recognize_cavok("CAVOK"), Some("Ceiling and visibility OK"));
    assert_eq!(recognize_cavok("XCAVOKX"), Some("Ceiling and visibility OK"));
    assert_eq!(recognize_cavok("CAV"), None);

    assert!(recognize_maintenance("$"));
    assert!(!recognize_maintenance("A$"));
}
