//! Snapshot replay: a vision source backed by a saved analysis JSON file.
//!
//! Useful for offline runs, fixtures, and the CLI, which operates on
//! snapshots exclusively.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{AnalysisSnapshot, SourceOptions, VisionError, VisionSource};

pub struct JsonFileSource {
    path: PathBuf,
    options: SourceOptions,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: SourceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SourceOptions) -> Self {
        self.options = options;
        self
    }

    /// Load and filter the snapshot synchronously.
    pub fn load(&self) -> Result<AnalysisSnapshot, VisionError> {
        load_snapshot(&self.path, &self.options)
    }
}

/// Read an analysis snapshot from a JSON file, applying `options`.
pub fn load_snapshot(
    path: &Path,
    options: &SourceOptions,
) -> Result<AnalysisSnapshot, VisionError> {
    let content = std::fs::read_to_string(path)?;
    let snapshot: AnalysisSnapshot =
        serde_json::from_str(&content).map_err(|e| VisionError::Parse(e.to_string()))?;

    tracing::debug!(
        labels = snapshot.labels.len(),
        text_detections = snapshot.text_detections.len(),
        "loaded analysis snapshot from {}",
        path.display()
    );

    Ok(options.apply(snapshot))
}

#[async_trait]
impl VisionSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn is_available(&self) -> bool {
        self.path.exists()
    }

    async fn analyze(&self, _image: &[u8]) -> Result<AnalysisSnapshot, VisionError> {
        self.load()
    }
}
