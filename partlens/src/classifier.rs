//! Keyword-based component type classification.

use serde::{Deserialize, Serialize};

use crate::detection::Label;
use crate::rules::{ComponentType, TYPE_KEYWORDS};

/// A single candidate produced by the classifier: the matched type, the
/// confidence of the label that matched, and that label's original name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMatch {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub confidence: f64,
    pub matched_label: String,
}

/// Score every canonical type against the label set.
///
/// Types are visited in table order. For each type the labels are scanned in
/// their original sequence order; the first label whose lowercased name
/// contains any of the type's keywords wins and scanning stops for that
/// type, so a higher-confidence label appearing later is never considered.
/// A label matching keywords of several types contributes to each of them
/// independently. The result is sorted by confidence descending with a
/// stable sort: ties keep table order.
pub fn classify(labels: &[Label]) -> Vec<TypeMatch> {
    let mut matches = Vec::new();

    for (component_type, keywords) in TYPE_KEYWORDS.iter() {
        for label in labels {
            let name = label.name.to_lowercase();
            if keywords.iter().any(|keyword| name.contains(keyword)) {
                matches.push(TypeMatch {
                    component_type: *component_type,
                    confidence: label.confidence,
                    matched_label: label.name.clone(),
                });
                break;
            }
        }
    }

    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    tracing::debug!(
        labels = labels.len(),
        candidates = matches.len(),
        "classified component labels"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_labels_yield_no_matches() {
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn test_first_label_wins_per_type() {
        // The later, higher-confidence resistor label must never be chosen.
        let labels = vec![
            Label::new("Carbon resistor", 61.0),
            Label::new("Metal film resistor", 97.0),
        ];

        let matches = classify(&labels);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].component_type, ComponentType::Resistor);
        assert_eq!(matches[0].confidence, 61.0);
        assert_eq!(matches[0].matched_label, "Carbon resistor");
    }

    #[test]
    fn test_label_contributes_to_multiple_types() {
        let labels = vec![Label::new("Resistor and capacitor assortment", 72.5)];

        let matches = classify(&labels);
        assert_eq!(matches.len(), 2);
        assert!(matches
            .iter()
            .any(|m| m.component_type == ComponentType::Resistor));
        assert!(matches
            .iter()
            .any(|m| m.component_type == ComponentType::Capacitor));
    }

    #[test]
    fn test_sorted_by_confidence_descending() {
        let labels = vec![
            Label::new("Connector", 55.0),
            Label::new("Microchip", 91.0),
            Label::new("Diode", 78.0),
        ];

        let matches = classify(&labels);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].component_type, ComponentType::IntegratedCircuit);
        assert_eq!(matches[1].component_type, ComponentType::Diode);
        assert_eq!(matches[2].component_type, ComponentType::Connector);
        for pair in matches.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_ties_keep_table_order() {
        // Equal confidence: the stable sort must preserve the rule-table
        // order (resistor before capacitor before inductor).
        let labels = vec![
            Label::new("Coil", 80.0),
            Label::new("Capacitor", 80.0),
            Label::new("Resistor", 80.0),
        ];

        let matches = classify(&labels);
        let order: Vec<ComponentType> = matches.iter().map(|m| m.component_type).collect();
        assert_eq!(
            order,
            vec![
                ComponentType::Resistor,
                ComponentType::Capacitor,
                ComponentType::Inductor,
            ]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let labels = vec![Label::new("ELECTROLYTIC CAPACITOR", 83.0)];
        let matches = classify(&labels);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].component_type, ComponentType::Capacitor);
        assert_eq!(matches[0].matched_label, "ELECTROLYTIC CAPACITOR");
    }
}
