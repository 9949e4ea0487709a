//! Simple identification example: build detections inline and print the
//! summary plus the ranked candidates.

use partlens::{render_summary, ComponentIdentifier, Label, TextDetection, TextGranularity};

fn main() {
    let labels = vec![
        Label::new("Electrolytic capacitor", 91.0),
        Label::new("Circuit board", 95.5),
    ];
    let text = vec![
        TextDetection {
            text: "10uF".to_string(),
            confidence: 82.0,
            granularity: TextGranularity::Line,
        },
        TextDetection {
            text: "16V".to_string(),
            confidence: 79.5,
            granularity: TextGranularity::Line,
        },
        TextDetection {
            text: "22uF".to_string(),
            confidence: 75.0,
            granularity: TextGranularity::Line,
        },
    ];

    let result = ComponentIdentifier::identify(&labels, &text);

    println!("{}", render_summary(&result));
    println!();
    for candidate in &result.possible_types {
        println!(
            "  {:<20} {:>5.1}%  (label: {})",
            candidate.component_type,
            candidate.confidence,
            candidate.matched_label
        );
    }
}
