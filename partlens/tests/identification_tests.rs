//! End-to-end identification tests over snapshot fixtures.

use partlens::prelude::*;
use partlens::{identify_snapshot, render_summary};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn identify_fixture(name: &str) -> IdentificationResult {
    identify_snapshot(&fixture_path(name), SourceOptions::default())
        .expect("fixture should load")
}

#[test]
fn test_resistor_fixture() {
    let result = identify_fixture("resistor.json");

    assert_eq!(result.type_label(), "resistor");
    assert_eq!(result.confidence, 93.4);

    let Some(ComponentAnalysis::Resistor(analysis)) = &result.analysis else {
        panic!("expected resistor analysis, got {:?}", result.analysis);
    };
    // First printed value wins even though 1kΩ follows.
    assert_eq!(analysis.estimated_value.as_deref(), Some("100Ω"));
    assert!(analysis.has_color_bands);
    assert_eq!(analysis.detected_colors, vec!["Red band", "Brown band"]);
    assert!(analysis.note.is_some());
}

#[test]
fn test_capacitor_fixture() {
    let result = identify_fixture("capacitor.json");

    assert_eq!(result.type_label(), "capacitor");

    let Some(ComponentAnalysis::Capacitor(analysis)) = &result.analysis else {
        panic!("expected capacitor analysis, got {:?}", result.analysis);
    };
    // Last matching line wins for each field, unlike the resistor path.
    assert_eq!(analysis.estimated_value.as_deref(), Some("22uF"));
    assert_eq!(analysis.voltage.as_deref(), Some("16V"));
}

#[test]
fn test_ic_fixture() {
    let result = identify_fixture("ic.json");

    assert_eq!(result.type_label(), "integrated_circuit");

    let Some(ComponentAnalysis::IntegratedCircuit(analysis)) = &result.analysis else {
        panic!("expected IC analysis, got {:?}", result.analysis);
    };
    assert_eq!(analysis.part_numbers, vec!["LM358", "K4D2"]);
    assert_eq!(analysis.manufacturers, vec!["Likely LM series"]);
}

#[test]
fn test_unknown_fixture() {
    let result = identify_fixture("unknown.json");

    assert_eq!(result.type_label(), "unknown");
    assert_eq!(result.confidence, 0.0);
    assert!(result.possible_types.is_empty());
    assert!(result.analysis.is_none());
    assert_eq!(
        render_summary(&result),
        "Identified as: unknown (0.0% confidence)"
    );
}

#[test]
fn test_possible_types_are_non_increasing() {
    for fixture in ["resistor.json", "capacitor.json", "ic.json", "unknown.json"] {
        let result = identify_fixture(fixture);
        for pair in result.possible_types.windows(2) {
            assert!(
                pair[0].confidence >= pair[1].confidence,
                "{fixture}: candidates out of order"
            );
        }
        if let Some(top) = result.possible_types.first() {
            assert_eq!(result.component_type, Some(top.component_type));
            assert_eq!(result.confidence, top.confidence);
        } else {
            assert_eq!(result.component_type, None);
            assert_eq!(result.confidence, 0.0);
        }
    }
}

#[test]
fn test_word_detections_are_dropped() {
    let result = identify_fixture("resistor.json");
    // The fixture carries one WORD entry that must never surface.
    assert_eq!(result.detected_text.len(), 2);
    assert!(result.detected_text.iter().all(|line| line.text != "100"));
}

#[test]
fn test_min_confidence_is_applied_at_the_boundary() {
    let options = SourceOptions {
        min_confidence: 90.0,
    };
    let result = identify_snapshot(&fixture_path("resistor.json"), options)
        .expect("fixture should load");

    // Both band labels fall below the threshold, so color evidence is gone
    // while the printed value survives (text is never filtered).
    assert_eq!(result.type_label(), "resistor");
    let Some(ComponentAnalysis::Resistor(analysis)) = &result.analysis else {
        panic!("expected resistor analysis");
    };
    assert!(!analysis.has_color_bands);
    assert_eq!(analysis.estimated_value.as_deref(), Some("100Ω"));
}

#[test]
fn test_identification_is_idempotent() {
    let first = identify_fixture("capacitor.json");
    let second = identify_fixture("capacitor.json");
    assert_eq!(first, second);
}

#[test]
fn test_result_json_shape() {
    let result = identify_fixture("capacitor.json");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["type"], "capacitor");
    assert_eq!(json["possibleTypes"][0]["type"], "capacitor");
    assert!(json["possibleTypes"][0]["matchedLabel"].is_string());
    assert_eq!(json["analysis"]["estimatedValue"], "22uF");
    assert_eq!(json["analysis"]["voltage"], "16V");
    assert!(json["detectedLabels"].is_array());
    assert!(json["detectedText"].is_array());
}
