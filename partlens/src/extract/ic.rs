//! Integrated-circuit attribute extraction: part numbers and manufacturer
//! series hints from the package printing.

use serde::{Deserialize, Serialize};

use crate::detection::TextLine;
use crate::rules::{MANUFACTURER_PREFIXES, PART_NUMBER_PATTERN};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcAnalysis {
    pub part_numbers: Vec<String>,
    pub manufacturers: Vec<String>,
}

/// Collect candidate part numbers and manufacturer-series hints.
///
/// Both checks run on every line independently; duplicates across lines are
/// kept, not deduplicated. The part-number check uses the trimmed line, the
/// prefix lookup the raw line's first two characters.
pub fn extract(lines: &[TextLine]) -> IcAnalysis {
    let mut analysis = IcAnalysis::default();

    for line in lines {
        let trimmed = line.text.trim();
        if PART_NUMBER_PATTERN.is_match(trimmed) {
            analysis.part_numbers.push(trimmed.to_string());
        }

        let prefix: String = line
            .text
            .chars()
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if MANUFACTURER_PREFIXES.contains(&prefix.as_str()) {
            analysis.manufacturers.push(format!("Likely {} series", prefix));
        }
    }

    analysis
}
