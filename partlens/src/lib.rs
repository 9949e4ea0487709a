//! PartLens - electronic component identification from vision-analysis output.
//!
//! This library turns raw detections produced by an external vision service
//! (object labels with confidence scores, plus detected text lines) into a
//! structured identification of an electronic component: its most likely
//! category, a ranked list of alternative categories, and category-specific
//! attributes such as a resistance value or IC part numbers.
//!
//! # Quick Start
//!
//! ```
//! use partlens::{ComponentIdentifier, Label, TextDetection, TextGranularity};
//!
//! let labels = vec![Label::new("Resistor", 93.0)];
//! let text = vec![TextDetection {
//!     text: "10kΩ".to_string(),
//!     confidence: 88.0,
//!     granularity: TextGranularity::Line,
//! }];
//!
//! let result = ComponentIdentifier::identify(&labels, &text);
//! println!("{}", partlens::render_summary(&result));
//! ```
//!
//! # Features
//!
//! - **Type classification**: keyword tables over detected labels with
//!   deterministic tie-breaking
//! - **Attribute extraction**: resistor values and color bands, capacitor
//!   value/voltage ratings, IC part numbers and manufacturer hints
//! - **Summary rendering**: fixed-format human-readable report
//! - **Vision sources**: snapshot replay and remote analysis endpoints
//!   (used by the CLI)

pub mod classifier;
pub mod detection;
pub mod extract;
pub mod identify;
pub mod report;
pub mod rules;
pub mod source;

// Re-export main types
pub use classifier::{classify, TypeMatch};
pub use detection::{Label, TextDetection, TextGranularity, TextLine};
pub use extract::{CapacitorAnalysis, ComponentAnalysis, IcAnalysis, ResistorAnalysis};
pub use identify::{ComponentIdentifier, IdentificationResult};
pub use report::render_summary;
pub use rules::ComponentType;
pub use source::{
    AnalysisSnapshot, HttpSource, JsonFileSource, SourceOptions, VisionError, VisionSource,
};

/// Library-level error for the boundary I/O around the engine. The engine
/// itself never fails: absent matches produce an `unknown` result.
#[derive(Debug, thiserror::Error)]
pub enum PartLensError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

impl From<VisionError> for PartLensError {
    fn from(e: VisionError) -> Self {
        match e {
            VisionError::Io(e) => PartLensError::Io(e),
            VisionError::Parse(m) => PartLensError::Parse(m),
            other => PartLensError::Other(other.to_string()),
        }
    }
}

/// Identify a component from a saved analysis snapshot (convenience wrapper).
pub fn identify_snapshot(
    path: &std::path::Path,
    options: SourceOptions,
) -> Result<IdentificationResult, PartLensError> {
    let snapshot = source::json_file::load_snapshot(path, &options)?;
    Ok(ComponentIdentifier::identify(
        &snapshot.labels,
        &snapshot.text_detections,
    ))
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ComponentAnalysis, ComponentIdentifier, ComponentType, IdentificationResult, Label,
        PartLensError, SourceOptions, TextDetection, TextGranularity, TypeMatch,
    };
}
