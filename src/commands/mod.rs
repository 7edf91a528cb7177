//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod list;
pub mod overrides;
pub mod play;
pub mod videos;

use std::path::Path;

use anyhow::Result;

use segshuf::segment::{
    JsonFileSource, LayeredSource, OverrideStore, Segment, SegmentSource, SourceError,
};
use segshuf::Config;

/// Overrides plus the dataset, with `--segments` replacing the configured dataset.
pub fn build_source(config: &Config, segments_file: Option<&Path>) -> Result<LayeredSource> {
    let dataset = match segments_file {
        Some(path) => path.to_path_buf(),
        None => config.segments_file()?,
    };
    let overrides = OverrideStore::new(config.overrides_dir()?);
    Ok(LayeredSource::new(Some(overrides), Some(JsonFileSource::new(dataset))))
}

/// Segments for `video_id`. A missing dataset file counts as no segments;
/// unreadable or malformed data is an error.
pub fn load_segments(source: &dyn SegmentSource, video_id: &str) -> Result<Vec<Segment>> {
    match source.segments(video_id) {
        Ok(segments) => Ok(segments),
        Err(SourceError::NotFound { path }) => {
            tracing::debug!(path = %path.display(), "dataset file missing");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}
