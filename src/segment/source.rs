//! Segment sources: where a video's segment list comes from.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{retain_valid, OverrideStore, Segment};

/// Errors that can occur while reading segment data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Segment file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid video id for storage: '{0}'")]
    InvalidKey(String),
}

/// Supplies the ordered segment list for a video identifier.
///
/// An unknown video is not an error: it yields an empty list.
pub trait SegmentSource {
    fn segments(&self, video_id: &str) -> Result<Vec<Segment>, SourceError>;
}

/// Load segments for `video_id`, degrading any failure to an empty list.
pub fn load_or_empty(source: &dyn SegmentSource, video_id: &str) -> Vec<Segment> {
    match source.segments(video_id) {
        Ok(segments) => {
            tracing::info!(video_id, count = segments.len(), "segments loaded");
            segments
        }
        Err(e) => {
            tracing::error!(video_id, error = %e, "failed to load segments, continuing with none");
            Vec::new()
        }
    }
}

/// The default dataset: one JSON file keyed by video id.
///
/// ```json
/// { "dQw4w9WgXcQ": { "songs": [ { "title": "Intro", "startTime": 0, "endTime": 42 } ] } }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All video ids present in the dataset, sorted.
    pub fn video_ids(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.read_all()?.into_keys().collect())
    }

    /// Top-level map only; each video's entry is decoded on its own.
    fn read_all(&self) -> Result<BTreeMap<String, Value>, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                SourceError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl SegmentSource for JsonFileSource {
    fn segments(&self, video_id: &str) -> Result<Vec<Segment>, SourceError> {
        let mut all = self.read_all()?;
        match all.remove(video_id) {
            Some(entry) => Ok(retain_valid(video_id, decode_songs(video_id, entry))),
            None => {
                tracing::debug!(video_id, path = %self.path.display(), "no segments configured");
                Ok(Vec::new())
            }
        }
    }
}

/// Segments of one dataset entry (`{ "songs": [...] }`).
///
/// Entries that do not decode as a [`Segment`] are skipped with a warning,
/// so one bad record never hides the rest of the dataset.
fn decode_songs(video_id: &str, entry: Value) -> Vec<Segment> {
    let songs = match entry {
        Value::Object(mut map) => map.remove("songs"),
        other => {
            tracing::warn!(video_id, entry = %other, "dataset entry is not an object");
            None
        }
    };
    let items = match songs {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => return Vec::new(),
        Some(other) => {
            tracing::warn!(video_id, songs = %other, "'songs' is not an array");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Segment>(item) {
            Ok(segment) => Some(segment),
            Err(e) => {
                tracing::warn!(video_id, error = %e, "skipping malformed segment");
                None
            }
        })
        .collect()
}

/// Override store first, default dataset second.
///
/// A video that has an override never falls through to the dataset, even
/// when its override list is empty.
pub struct LayeredSource {
    overrides: Option<OverrideStore>,
    default: Option<JsonFileSource>,
}

impl LayeredSource {
    pub fn new(overrides: Option<OverrideStore>, default: Option<JsonFileSource>) -> Self {
        Self { overrides, default }
    }
}

impl SegmentSource for LayeredSource {
    fn segments(&self, video_id: &str) -> Result<Vec<Segment>, SourceError> {
        if let Some(store) = &self.overrides {
            if let Some(segments) = store.get(video_id)? {
                tracing::debug!(video_id, "using segment override");
                return Ok(segments);
            }
        }
        match &self.default {
            Some(source) => source.segments(video_id),
            None => Ok(Vec::new()),
        }
    }
}
