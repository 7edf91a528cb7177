//! Per-video segment overrides stored as `<video_id>.json` files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{retain_valid, Segment, SourceError};

/// Directory of per-video segment lists that shadow the default dataset.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    dir: PathBuf,
}

impl OverrideStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Segments stored for `video_id`, or `None` when there is no override.
    pub fn get(&self, video_id: &str) -> Result<Option<Vec<Segment>>, SourceError> {
        let path = self.path_for(video_id)?;
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SourceError::Read { path, source }),
        };
        let segments: Vec<Segment> =
            serde_json::from_str(&content).map_err(|source| SourceError::Parse { path, source })?;
        Ok(Some(retain_valid(video_id, segments)))
    }

    /// Store `segments` as the override for `video_id`, replacing any previous one.
    pub fn put(&self, video_id: &str, segments: &[Segment]) -> Result<PathBuf, SourceError> {
        let path = self.path_for(video_id)?;
        fs::create_dir_all(&self.dir).map_err(|source| SourceError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(segments).map_err(|source| SourceError::Parse {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| SourceError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(video_id, count = segments.len(), "override stored");
        Ok(path)
    }

    /// Delete the override for `video_id`. Returns false if there was none.
    pub fn remove(&self, video_id: &str) -> Result<bool, SourceError> {
        let path = self.path_for(video_id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(SourceError::Write { path, source }),
        }
    }

    /// Video ids that have an override, sorted.
    pub fn list(&self) -> Result<Vec<String>, SourceError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(SourceError::Read {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut ids: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn path_for(&self, video_id: &str) -> Result<PathBuf, SourceError> {
        let valid = !video_id.is_empty()
            && video_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SourceError::InvalidKey(video_id.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", video_id)))
    }
}
