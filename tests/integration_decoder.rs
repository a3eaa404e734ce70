//! Integration tests decoding complete reports through the public API
//!
//! Covers the envelope-to-decoder path and rendering of real-world reports.

use metar_decoder::decoder::MetarDecoder;
use metar_decoder::{
    PressureUnit, TokenKind, VisibilityUnit, WindDirection, decode, parse_envelope, render_report,
};

const ENVELOPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns:xsd="http://www.w3.org/2001/XMLSchema" version="1.2">
  <request_index>2853931</request_index>
  <data_source name="metars" />
  <request type="retrieve" />
  <errors />
  <warnings />
  <time_taken_ms>3</time_taken_ms>
  <data num_results="1">
    <METAR>
      <raw_text>EHGR 191725Z 22008KT 9000 -DZ BR BKN006 OVC012 11/10 Q1008</raw_text>
      <station_id>EHGR</station_id>
      <observation_time>2024-10-19T17:25:00Z</observation_time>
      <latitude>51.57</latitude>
      <longitude>4.93</longitude>
      <temp_c>11.0</temp_c>
      <flight_category>IFR</flight_category>
      <metar_type>METAR</metar_type>
      <elevation_m>15.0</elevation_m>
    </METAR>
  </data>
</response>"#;

#[test]
fn test_envelope_to_decoded_report() {
    let observation = parse_envelope(ENVELOPE, "ehgr", 4096).unwrap();
    assert_eq!(observation.flight_category, "IFR");
    assert_eq!(observation.observation_time_display(), "2024-10-19 17:25:00Z");

    let report = decode(&observation.raw_text);
    assert_eq!(report.station.as_deref(), Some("EHGR"));
    assert_eq!(report.wind.as_ref().unwrap().direction, WindDirection::Degrees(220));
    assert_eq!(report.wind.as_ref().unwrap().gust, 8);

    let visibility = report.visibility.unwrap();
    assert_eq!((visibility.value, visibility.unit), (9000, VisibilityUnit::Meters));

    assert_eq!(report.phenomena, vec!["Light Drizzle", "Mist"]);
    assert_eq!(report.clouds.len(), 2);
    assert_eq!(report.clouds[0].altitude_ft(), Some(600));
    assert_eq!(report.pressure.unwrap().unit, PressureUnit::Hectopascals);
}

#[test]
fn test_envelope_without_results_is_not_found() {
    let xml = r#"<response><data num_results="0"></data></response>"#;
    let err = parse_envelope(xml, "XXXX", 4096).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_rendered_report_labels() {
    let rendered = render_report(&decode(
        "KJFK 191751Z 04008KT 3SM BR FEW005 OVC010 14/13 A3012",
    ));

    assert!(rendered.starts_with("Station       : KJFK\nDay           : 19\n"));
    assert!(rendered.contains("Time          : 17:51 UTC\n"));
    assert!(rendered.contains("Wind direction: 40 (NE)\n"));
    assert!(rendered.contains("Visibility    : 3 SM\n"));
    assert!(rendered.contains("Pressure      : 30.12 \"Hg\n"));
    assert!(rendered.contains("Phenomena     : Mist\n"));
}

#[test]
fn test_vertical_visibility_and_freezing_fog() {
    let report = decode("CYYZ 191800Z 00000KT 1/4SM FZFG VV002 M03/M03 A3001");

    let wind = report.wind.unwrap();
    assert_eq!(wind.direction.as_degrees(), 0);
    assert_eq!(wind.speed, 0);
    assert_eq!(report.phenomena, vec!["Freezing Fog"]);
    assert_eq!(report.clouds[0].cover, "Vertical Visibility");
    assert_eq!(report.clouds[0].altitude, Some(2));
    // Fractional visibility is not a recognised group
    assert!(report.visibility.is_none());
}

#[test]
fn test_stats_for_report_with_remarks() {
    let result = MetarDecoder::new()
        .decode_with_stats("KBOS 191754Z 27010KT 10SM SCT045 16/08 A3005 RMK AO2 T01560083");

    assert_eq!(result.stats.total_tokens, 10);
    assert_eq!(result.stats.recognized_tokens, 7);
    assert_eq!(result.stats.unmatched, vec!["RMK", "AO2", "T01560083"]);
    assert_eq!(result.stats.count(TokenKind::Cloud), 1);
}

#[test]
fn test_cumulonimbus_mammatus_layer() {
    let report = decode("KOKC 192000Z 18020G35KT 7SM TSRA BKN040CBMAM 27/22 A2990");
    assert_eq!(report.clouds.len(), 1);
    assert!(report.clouds[0].modifier.contains("Mammatus"));
    assert_eq!(report.phenomena, vec!["Thunderstorm Rain"]);
}
