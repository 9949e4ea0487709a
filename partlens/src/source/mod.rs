//! Boundary seam for the external vision-analysis collaborator.
//!
//! The identification engine never performs I/O: a [`VisionSource`] resolves
//! both detection collections up front (possibly concurrently on its side)
//! and hands them over together. Confidence filtering also lives here - the
//! engine consumes whatever a source produced, unfiltered.

pub mod http;
pub mod json_file;

pub use http::HttpSource;
pub use json_file::JsonFileSource;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::detection::{Label, TextDetection};

/// Errors raised while fetching or decoding detections.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("analysis endpoint returned {status}: {message}")]
    ApiError { status: u16, message: String },
    #[error("failed to decode analysis output: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One fully resolved analysis: both detection collections together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub text_detections: Vec<TextDetection>,
}

/// Options applied by sources before detections reach the engine.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Labels below this confidence are dropped at the boundary.
    pub min_confidence: f64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            min_confidence: 50.0,
        }
    }
}

impl SourceOptions {
    pub(crate) fn apply(&self, mut snapshot: AnalysisSnapshot) -> AnalysisSnapshot {
        snapshot
            .labels
            .retain(|label| label.confidence >= self.min_confidence);
        snapshot
    }
}

/// A provider of vision-analysis output.
#[async_trait]
pub trait VisionSource: Send + Sync {
    /// Source name for logs and status reporting.
    fn name(&self) -> &str;

    /// Whether the source can currently serve requests.
    async fn is_available(&self) -> bool;

    /// Analyze an image and return the resolved detections.
    async fn analyze(&self, image: &[u8]) -> Result<AnalysisSnapshot, VisionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_confidence_applies_to_labels_only() {
        let snapshot = AnalysisSnapshot {
            labels: vec![Label::new("Resistor", 93.0), Label::new("Wire", 41.0)],
            text_detections: vec![TextDetection {
                text: "1kΩ".to_string(),
                confidence: 30.0,
                granularity: crate::detection::TextGranularity::Line,
            }],
        };

        let filtered = SourceOptions::default().apply(snapshot);
        assert_eq!(filtered.labels.len(), 1);
        assert_eq!(filtered.labels[0].name, "Resistor");
        // Text detections pass through untouched.
        assert_eq!(filtered.text_detections.len(), 1);
    }

    #[test]
    fn test_snapshot_defaults_missing_collections() {
        let snapshot: AnalysisSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.labels.is_empty());
        assert!(snapshot.text_detections.is_empty());
    }
}
