//! Tests for the abbreviation tables

use crate::decoder::dictionary::*;
use crate::models::AltitudeDisplay;
use std::collections::HashSet;

#[test]
fn test_table_sizes() {
    assert_eq!(CLOUD_ABBREVIATIONS.len(), 15);
    assert_eq!(PHENOMENON_CODES.len(), 31);
}

#[test]
fn test_codes_are_unique() {
    let cloud: HashSet<_> = CLOUD_ABBREVIATIONS.iter().map(|e| e.code).collect();
    assert_eq!(cloud.len(), CLOUD_ABBREVIATIONS.len());

    let phenomena: HashSet<_> = PHENOMENON_CODES.iter().map(|e| e.code).collect();
    assert_eq!(phenomena.len(), PHENOMENON_CODES.len());
}

#[test]
fn test_phenomenon_codes_are_two_letters() {
    for entry in PHENOMENON_CODES.iter() {
        assert_eq!(entry.code.len(), PHENOMENON_CODE_LEN, "{}", entry.code);
        assert!(entry.code.chars().all(|c| c.is_ascii_uppercase()));
        assert!(!entry.description.ends_with(' '));
    }
}

/// CB is a prefix of CBMAM; exact lookup must still tell them apart
#[test]
fn test_exact_lookup_distinguishes_prefixes() {
    let cb = lookup_cloud("CB").unwrap();
    let cbmam = lookup_cloud("CBMAM").unwrap();
    assert_eq!(cb.description, ", Cumulonimbus clouds in vicinity");
    assert_eq!(
        cbmam.description,
        ", Cumulonimbus Mammatus in vicinity (expect turbulent air)"
    );
}

#[test]
fn test_lookup_does_not_prefix_match() {
    assert!(lookup_cloud("BKN035").is_none());
    assert!(lookup_cloud("C").is_none());
    assert!(lookup_phenomenon("R").is_none());
    assert!(lookup_phenomenon("RAX").is_none());
}

#[test]
fn test_cloud_policies() {
    assert_eq!(
        lookup_cloud("SKC").unwrap().altitude_display,
        AltitudeDisplay::Hide
    );
    assert_eq!(
        lookup_cloud("VV").unwrap().altitude_display,
        AltitudeDisplay::Show
    );
    assert_eq!(
        lookup_cloud("TCU").unwrap().altitude_display,
        AltitudeDisplay::NotApplicable
    );

    let clear: Vec<_> = cloud_codes(AltitudeDisplay::Hide).collect();
    assert_eq!(clear, vec!["SKC", "CLR", "NSC", "NCD"]);
}

#[test]
fn test_phenomenon_lookup() {
    assert_eq!(lookup_phenomenon("TS").unwrap().description, "Thunderstorm");
    assert_eq!(lookup_phenomenon("VC").unwrap().description, "Vicinity");
    assert_eq!(
        lookup_phenomenon("GS").unwrap().description,
        "Small hail/snow pellets"
    );
}
