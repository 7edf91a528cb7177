//! Segment data model and dataset loading
//!
//! A segment is a named `[start, end)` region of a video's timeline.
//! Segments for a video come from a [`SegmentSource`]: the default JSON
//! dataset, optionally shadowed per video by an [`OverrideStore`].

mod overrides;
mod source;
mod video_id;

use serde::{Deserialize, Serialize};

pub use overrides::OverrideStore;
pub use source::{load_or_empty, JsonFileSource, LayeredSource, SegmentSource, SourceError};
pub use video_id::{video_id_from_input, VideoIdError};

/// Errors raised when a segment's times are unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentError {
    #[error("Segment '{title}' has a negative or non-finite start time ({start})")]
    InvalidStart { title: String, start: f64 },

    #[error("Segment '{title}' ends at {end} which is not after its start ({start})")]
    EmptyRange { title: String, start: f64, end: f64 },
}

/// A named, playable region of the current video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub title: String,
    /// Start of the region in seconds
    pub start_time: f64,
    /// End of the region in seconds (exclusive)
    pub end_time: f64,
}

impl Segment {
    /// Create a segment, rejecting ranges that could never be played.
    pub fn new(
        title: impl Into<String>,
        start_time: f64,
        end_time: f64,
    ) -> Result<Self, SegmentError> {
        let segment = Self {
            title: title.into(),
            start_time,
            end_time,
        };
        segment.validate()?;
        Ok(segment)
    }

    /// Check that `0 <= start_time < end_time` with finite values.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if !self.start_time.is_finite() || self.start_time < 0.0 {
            return Err(SegmentError::InvalidStart {
                title: self.title.clone(),
                start: self.start_time,
            });
        }
        if !self.end_time.is_finite() || self.end_time <= self.start_time {
            return Err(SegmentError::EmptyRange {
                title: self.title.clone(),
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// `m:ss - m:ss` label used by the list view and the CLI.
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", format_time(self.start_time), format_time(self.end_time))
    }
}

/// Format seconds as `m:ss`.
///
/// Minutes are not folded into hours, so 3725 seconds is `62:05`.
/// Fractions are floored and negative input is treated as zero.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Drop segments that fail validation, logging each one.
pub(crate) fn retain_valid(video_id: &str, segments: Vec<Segment>) -> Vec<Segment> {
    segments
        .into_iter()
        .filter(|segment| match segment.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(video_id, error = %e, "skipping invalid segment");
                false
            }
        })
        .collect()
}
