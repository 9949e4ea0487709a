//! Input data model: detections handed over by the vision-analysis service.
//!
//! Both collections arrive fully resolved; the engine performs no further
//! fetching and no confidence filtering (that is the source's job, see
//! [`crate::source::SourceOptions`]).

use serde::{Deserialize, Serialize};

/// An object detection: a name plus a confidence score in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub name: String,
    pub confidence: f64,
}

impl Label {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Granularity of a text detection. The engine consumes `Line` entries only;
/// word-level detections are discarded before identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextGranularity {
    Line,
    Word,
}

/// A raw text detection as produced by the vision service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDetection {
    pub text: String,
    pub confidence: f64,
    pub granularity: TextGranularity,
}

/// A line-granularity text detection retained as identification evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLine {
    pub text: String,
    pub confidence: f64,
}

impl TextLine {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Keep line-granularity detections only, preserving input order.
pub fn filter_lines(detections: &[TextDetection]) -> Vec<TextLine> {
    detections
        .iter()
        .filter(|d| d.granularity == TextGranularity::Line)
        .map(|d| TextLine {
            text: d.text.clone(),
            confidence: d.confidence,
        })
        .collect()
}
