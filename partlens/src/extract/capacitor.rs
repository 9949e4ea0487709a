//! Capacitor attribute extraction: capacitance and voltage rating from the
//! printed text.

use serde::{Deserialize, Serialize};

use super::{scan_lines, ScanPolicy};
use crate::detection::TextLine;
use crate::rules::{CAPACITANCE_PATTERN, VOLTAGE_PATTERN};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitorAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,
}

/// Derive capacitor attributes from text evidence.
///
/// Every line is scanned for both fields independently; the last matching
/// line wins for each. Unlike the resistor extractor there is no early exit.
pub fn extract(lines: &[TextLine]) -> CapacitorAnalysis {
    let mut analysis = CapacitorAnalysis::default();

    if let Some(caps) = scan_lines(lines, &CAPACITANCE_PATTERN, ScanPolicy::LastMatch) {
        analysis.estimated_value = Some(format!("{}{}F", &caps[1], &caps[2]));
    }
    if let Some(caps) = scan_lines(lines, &VOLTAGE_PATTERN, ScanPolicy::LastMatch) {
        analysis.voltage = Some(format!("{}V", &caps[1]));
    }

    analysis
}
