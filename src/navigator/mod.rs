//! Segment navigation state machine
//!
//! [`SegmentNavigator`] decides which segment is current and where "next" and
//! "previous" lead. It never touches the player: callers use the returned index
//! to seek, and [`SegmentNavigator::boundary_crossed`] to decide when to advance.
//!
//! # States
//!
//! - `Idle`: nothing selected (after [`load`](SegmentNavigator::load))
//! - `Positioned`: a segment is selected, sequential traversal
//! - `PositionedShuffled`: a segment is selected, random traversal
//!
//! `next` honours shuffle mode while `previous` always steps back in list
//! order. Explicit selection leaves shuffle mode.

mod picker;

pub use picker::{IndexPicker, RandomPicker};

use crate::segment::Segment;

/// Conditions reported to the caller when a navigation request cannot be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("No segments loaded for this video")]
    NoSegments,

    #[error("Segment {index} does not exist (only {len} loaded)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Traversal mode used by `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Sequential,
    Shuffled,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Sequential => "in order",
            Mode::Shuffled => "shuffled",
        }
    }
}

/// Observable state of the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    Positioned,
    PositionedShuffled,
}

/// Owns the segment list of the active video and the traversal position.
pub struct SegmentNavigator {
    segments: Vec<Segment>,
    current: Option<usize>,
    mode: Mode,
    picker: Box<dyn IndexPicker + Send>,
}

impl std::fmt::Debug for SegmentNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentNavigator")
            .field("segments", &self.segments.len())
            .field("current", &self.current)
            .field("mode", &self.mode)
            .finish()
    }
}

impl Default for SegmentNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentNavigator {
    /// Empty navigator drawing shuffle positions from OS entropy.
    pub fn new() -> Self {
        Self::with_picker(RandomPicker::from_entropy())
    }

    /// Empty navigator using `picker` for shuffle draws.
    pub fn with_picker(picker: impl IndexPicker + Send + 'static) -> Self {
        Self {
            segments: Vec::new(),
            current: None,
            mode: Mode::Sequential,
            picker: Box::new(picker),
        }
    }

    /// Replace the segment list. Always returns to `Idle` + `Sequential`.
    pub fn load(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.current = None;
        self.mode = Mode::Sequential;
    }

    /// Enter shuffle mode at a uniformly random segment.
    pub fn start_shuffle(&mut self) -> Result<usize, NavError> {
        let len = self.non_empty_len()?;
        self.mode = Mode::Shuffled;
        let index = self.picker.pick(len);
        self.current = Some(index);
        Ok(index)
    }

    /// Move to the next segment according to the current mode.
    ///
    /// In shuffle mode the draw is repeated until it differs from the current
    /// segment, unless only one segment exists.
    pub fn advance(&mut self) -> Result<usize, NavError> {
        let len = self.non_empty_len()?;
        let next = match self.mode {
            Mode::Sequential => self.current.map_or(0, |i| (i + 1) % len),
            Mode::Shuffled => loop {
                let candidate = self.picker.pick(len);
                if len == 1 || Some(candidate) != self.current {
                    break candidate;
                }
            },
        };
        self.current = Some(next);
        Ok(next)
    }

    /// Move to the previous segment in list order, whatever the mode.
    ///
    /// `Idle` counts as position -1, so from there this lands on `(N - 2) mod N`.
    pub fn retreat(&mut self) -> Result<usize, NavError> {
        let len = self.non_empty_len()?;
        let prev = match self.current {
            Some(i) => (i + len - 1) % len,
            None => (len + len - 2) % len,
        };
        self.current = Some(prev);
        Ok(prev)
    }

    /// Jump to `index` and return to sequential traversal.
    pub fn select_explicit(&mut self, index: usize) -> Result<usize, NavError> {
        let len = self.segments.len();
        if index >= len {
            return Err(NavError::IndexOutOfRange { index, len });
        }
        self.current = Some(index);
        self.mode = Mode::Sequential;
        Ok(index)
    }

    /// True once `current_time` reaches the end of the selected segment.
    pub fn boundary_crossed(&self, current_time: f64) -> bool {
        self.current_segment()
            .is_some_and(|segment| current_time >= segment.end_time)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_segment(&self) -> Option<&Segment> {
        self.current.and_then(|i| self.segments.get(i))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> NavState {
        match (self.current, self.mode) {
            (None, _) => NavState::Idle,
            (Some(_), Mode::Sequential) => NavState::Positioned,
            (Some(_), Mode::Shuffled) => NavState::PositionedShuffled,
        }
    }

    fn non_empty_len(&self) -> Result<usize, NavError> {
        match self.segments.len() {
            0 => Err(NavError::NoSegments),
            len => Ok(len),
        }
    }
}
