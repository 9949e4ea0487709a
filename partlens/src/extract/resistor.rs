//! Resistor attribute extraction: color-band evidence from labels, printed
//! value from text lines.

use serde::{Deserialize, Serialize};

use super::{scan_lines, ScanPolicy};
use crate::detection::{Label, TextLine};
use crate::rules::{COLOR_BAND_NOTE, RESISTANCE_PATTERN, RESISTOR_COLORS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResistorAnalysis {
    pub has_color_bands: bool,
    pub detected_colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Derive resistor attributes from label and text evidence.
pub fn extract(labels: &[Label], lines: &[TextLine]) -> ResistorAnalysis {
    let mut analysis = ResistorAnalysis::default();

    // Two or more band-color names among the labels is treated as a banded
    // body; the original label names are kept verbatim.
    let colors: Vec<String> = labels
        .iter()
        .filter(|label| {
            let name = label.name.to_lowercase();
            RESISTOR_COLORS.iter().any(|color| name.contains(color))
        })
        .map(|label| label.name.clone())
        .collect();

    if colors.len() >= 2 {
        analysis.has_color_bands = true;
        analysis.detected_colors = colors;
        analysis.note = Some(COLOR_BAND_NOTE.to_string());
    }

    // First printed value wins; later lines are never consulted.
    if let Some(caps) = scan_lines(lines, &RESISTANCE_PATTERN, ScanPolicy::FirstMatch) {
        analysis.estimated_value = Some(format!("{}{}Ω", &caps[1], &caps[2]));
    }

    analysis
}
