//! Category-specific attribute extraction from detected text evidence.
//!
//! Each extractor consumes the line-granularity text set (the resistor one
//! also reads labels for color-band evidence) and produces its own analysis
//! structure. Exactly one extractor runs per identification, selected by the
//! top-ranked classifier candidate.

pub mod capacitor;
pub mod ic;
pub mod resistor;

pub use capacitor::CapacitorAnalysis;
pub use ic::IcAnalysis;
pub use resistor::ResistorAnalysis;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::detection::TextLine;

/// Attributes extracted for the selected component category. Variants are
/// mutually exclusive; categories without an extractor produce none. The
/// untagged representation keeps the wire shape flat, so this type is
/// serialize-only (the variants would be ambiguous to deserialize).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentAnalysis {
    Resistor(ResistorAnalysis),
    Capacitor(CapacitorAnalysis),
    IntegratedCircuit(IcAnalysis),
}

/// Line-scan policy for pattern extraction.
///
/// Resistor values take the first matching line and stop; capacitor fields
/// scan every line and keep the last match, later lines overwriting earlier
/// ones. The asymmetry is deliberate observed behavior and is pinned by
/// tests; do not unify the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanPolicy {
    FirstMatch,
    LastMatch,
}

/// Scan text lines with `pattern`, selecting the match dictated by `policy`.
pub(crate) fn scan_lines<'a>(
    lines: &'a [TextLine],
    pattern: &Regex,
    policy: ScanPolicy,
) -> Option<Captures<'a>> {
    match policy {
        ScanPolicy::FirstMatch => lines.iter().find_map(|line| pattern.captures(&line.text)),
        ScanPolicy::LastMatch => {
            let mut selected = None;
            for line in lines {
                if let Some(captures) = pattern.captures(&line.text) {
                    selected = Some(captures);
                }
            }
            selected
        }
    }
}
