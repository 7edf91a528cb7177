//! Segment sources against the fixture files

use std::fs;

use tempfile::TempDir;

use segshuf::segment::{JsonFileSource, LayeredSource, OverrideStore, SegmentSource, SourceError};
use segshuf::Segment;

use crate::helpers::fixture_path;

fn layered(dir: &TempDir) -> (OverrideStore, LayeredSource) {
    let store = OverrideStore::new(dir.path().join("overrides"));
    let source = LayeredSource::new(
        Some(store.clone()),
        Some(JsonFileSource::new(fixture_path("segments.json"))),
    );
    (store, source)
}

#[test]
fn dataset_ids_are_sorted() {
    let source = JsonFileSource::new(fixture_path("segments.json"));
    assert_eq!(
        source.video_ids().unwrap(),
        vec!["dQw4w9WgXcQ", "live-set-2023", "no-songs"]
    );
}

#[test]
fn override_takes_precedence() {
    let dir = TempDir::new().unwrap();
    let (store, source) = layered(&dir);

    assert_eq!(source.segments("dQw4w9WgXcQ").unwrap().len(), 3);

    store
        .put("dQw4w9WgXcQ", &[Segment::new("Only", 1.0, 2.0).unwrap()])
        .unwrap();
    let segments = source.segments("dQw4w9WgXcQ").unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].title, "Only");

    assert!(store.remove("dQw4w9WgXcQ").unwrap());
    assert_eq!(source.segments("dQw4w9WgXcQ").unwrap().len(), 3);
}

#[test]
fn empty_override_still_shadows() {
    let dir = TempDir::new().unwrap();
    let (store, source) = layered(&dir);
    store.put("dQw4w9WgXcQ", &[]).unwrap();
    assert!(source.segments("dQw4w9WgXcQ").unwrap().is_empty());
}

#[test]
fn override_file_matches_dataset_format() {
    let dir = TempDir::new().unwrap();
    let (store, _source) = layered(&dir);
    let path = store
        .put("abc", &[Segment::new("Intro", 0.0, 12.5).unwrap()])
        .unwrap();

    let content = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value[0]["startTime"], 0.0);
    assert_eq!(value[0]["endTime"], 12.5);
}

#[test]
fn missing_dataset_is_not_found() {
    let dir = TempDir::new().unwrap();
    let source = JsonFileSource::new(dir.path().join("absent.json"));
    assert!(matches!(
        source.segments("abc"),
        Err(SourceError::NotFound { .. })
    ));
}

#[test]
fn unsafe_override_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let (store, _source) = layered(&dir);
    assert!(matches!(
        store.put("../escape", &[]),
        Err(SourceError::InvalidKey(_))
    ));
}
