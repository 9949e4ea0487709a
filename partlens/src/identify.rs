//! Result assembly: one classification pass plus category-specific
//! extraction, packaged with the raw evidence.

use serde::{Serialize, Serializer};

use crate::classifier::{classify, TypeMatch};
use crate::detection::{filter_lines, Label, TextDetection, TextLine};
use crate::extract::{self, ComponentAnalysis};
use crate::rules::ComponentType;

/// The assembled identification of one component image.
///
/// `possible_types` is sorted by confidence descending; when it is
/// non-empty, `component_type` and `confidence` mirror its first entry,
/// otherwise the result reports `unknown` at confidence 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    /// Most likely category; `None` is reported as `"unknown"`.
    #[serde(rename = "type", serialize_with = "serialize_type")]
    pub component_type: Option<ComponentType>,
    pub confidence: f64,
    pub possible_types: Vec<TypeMatch>,
    pub detected_labels: Vec<Label>,
    pub detected_text: Vec<TextLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ComponentAnalysis>,
}

fn serialize_type<S: Serializer>(
    component_type: &Option<ComponentType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match component_type {
        Some(ty) => serializer.serialize_str(ty.label()),
        None => serializer.serialize_str("unknown"),
    }
}

impl IdentificationResult {
    /// Wire/report label: the canonical type label or `"unknown"`.
    pub fn type_label(&self) -> &'static str {
        self.component_type
            .map(|ty| ty.label())
            .unwrap_or("unknown")
    }
}

/// Stateless identification engine. The rule tables are static and
/// read-only, so concurrent callers need no synchronization; no operation
/// here suspends, blocks, or performs I/O.
pub struct ComponentIdentifier;

impl ComponentIdentifier {
    /// Identify a component from label and text detections.
    ///
    /// Word-granularity text is discarded first. The classifier runs once;
    /// the top candidate selects at most one extractor (resistor, capacitor
    /// or integrated circuit - other categories have none). The raw label
    /// and line collections are carried on the result for traceability.
    pub fn identify(labels: &[Label], detections: &[TextDetection]) -> IdentificationResult {
        let lines = filter_lines(detections);
        let possible_types = classify(labels);

        let (component_type, confidence) = match possible_types.first() {
            Some(top) => (Some(top.component_type), top.confidence),
            None => (None, 0.0),
        };

        let analysis = component_type.and_then(|ty| match ty {
            ComponentType::Resistor => Some(ComponentAnalysis::Resistor(
                extract::resistor::extract(labels, &lines),
            )),
            ComponentType::Capacitor => Some(ComponentAnalysis::Capacitor(
                extract::capacitor::extract(&lines),
            )),
            ComponentType::IntegratedCircuit => Some(ComponentAnalysis::IntegratedCircuit(
                extract::ic::extract(&lines),
            )),
            _ => None,
        });

        match component_type {
            Some(ty) => tracing::info!(component_type = %ty, confidence, "identified component"),
            None => tracing::debug!("no candidate types; reporting unknown"),
        }

        IdentificationResult {
            component_type,
            confidence,
            possible_types,
            detected_labels: labels.to_vec(),
            detected_text: lines,
            analysis,
        }
    }
}
