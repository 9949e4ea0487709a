//! Fixed-format human-readable summary rendering.

use crate::extract::ComponentAnalysis;
use crate::identify::IdentificationResult;

/// Render the multi-line report for an identification result.
///
/// The first line is always emitted; analysis lines follow only when the
/// selected category produced them. For resistors the printed value beats
/// color evidence - the two lines are mutually exclusive.
pub fn render_summary(result: &IdentificationResult) -> String {
    let mut summary = format!(
        "Identified as: {} ({:.1}% confidence)",
        result.type_label(),
        result.confidence
    );

    match &result.analysis {
        Some(ComponentAnalysis::Resistor(resistor)) => {
            if let Some(value) = &resistor.estimated_value {
                summary.push_str(&format!("\nEstimated value: {}", value));
            } else if resistor.has_color_bands {
                summary.push_str(&format!(
                    "\nDetected colors: {}",
                    resistor.detected_colors.join(", ")
                ));
            }
        }
        Some(ComponentAnalysis::Capacitor(capacitor)) => {
            if let Some(value) = &capacitor.estimated_value {
                summary.push_str(&format!("\nEstimated value: {}", value));
            }
            if let Some(voltage) = &capacitor.voltage {
                summary.push_str(&format!("\nVoltage rating: {}", voltage));
            }
        }
        Some(ComponentAnalysis::IntegratedCircuit(ic)) => {
            if !ic.part_numbers.is_empty() {
                summary.push_str(&format!("\nPart numbers: {}", ic.part_numbers.join(", ")));
            }
        }
        None => {}
    }

    summary
}
