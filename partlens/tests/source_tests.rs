//! Tests for the vision-source boundary layer.

use std::io::Write;

use partlens::source::{JsonFileSource, SourceOptions, VisionError, VisionSource};
use partlens::HttpSource;

fn write_snapshot(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write snapshot");
    file
}

#[tokio::test]
async fn test_json_file_source_replays_snapshot() {
    let file = write_snapshot(
        r#"{
            "labels": [{ "name": "Resistor", "confidence": 93.0 }],
            "textDetections": [
                { "text": "1kΩ", "confidence": 88.0, "granularity": "LINE" }
            ]
        }"#,
    );

    let source = JsonFileSource::new(file.path());
    assert_eq!(source.name(), "json-file");
    assert!(source.is_available().await);

    let snapshot = source.analyze(&[]).await.expect("snapshot should load");
    assert_eq!(snapshot.labels.len(), 1);
    assert_eq!(snapshot.text_detections.len(), 1);
}

#[tokio::test]
async fn test_json_file_source_applies_min_confidence() {
    let file = write_snapshot(
        r#"{
            "labels": [
                { "name": "Resistor", "confidence": 93.0 },
                { "name": "Wire", "confidence": 40.0 }
            ],
            "textDetections": []
        }"#,
    );

    let source = JsonFileSource::new(file.path()).with_options(SourceOptions {
        min_confidence: 50.0,
    });
    let snapshot = source.analyze(&[]).await.expect("snapshot should load");
    assert_eq!(snapshot.labels.len(), 1);
    assert_eq!(snapshot.labels[0].name, "Resistor");
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let source = JsonFileSource::new("/nonexistent/snapshot.json");
    assert!(!source.is_available().await);

    let err = source.analyze(&[]).await.unwrap_err();
    assert!(matches!(err, VisionError::Io(_)), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_snapshot_is_parse_error() {
    let file = write_snapshot("{ not json");

    let err = JsonFileSource::new(file.path())
        .analyze(&[])
        .await
        .unwrap_err();
    assert!(matches!(err, VisionError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_http_source_unreachable_endpoint() {
    // Nothing listens here; the probe must report unavailable instead of
    // erroring out.
    let source = HttpSource::new(Some("http://127.0.0.1:9".to_string()));
    assert_eq!(source.name(), "http");
    assert!(!source.is_available().await);
    assert!(source.analyze(&[0u8; 4]).await.is_err());
}
