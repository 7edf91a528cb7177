//! Session driver
//!
//! A [`Session`] binds the [`SegmentNavigator`] to a [`PlayerHandle`]: it turns
//! the four panel intents into navigator operations, seeks the player to the
//! chosen segment, and auto-advances when the playhead crosses a segment's end.
//! [`Shuffler`] adds the boundary poller and video navigation on top.

mod shuffler;

pub use shuffler::Shuffler;

use crate::navigator::{Mode, NavError, SegmentNavigator};
use crate::player::PlayerHandle;
use crate::segment::Segment;

/// User intents forwarded by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Shuffle,
    Next,
    Previous,
    Select(usize),
}

/// Behaviour switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Auto-advance at segment ends in sequential mode too (shuffle mode always does)
    pub auto_advance_sequential: bool,
}

/// One row of the panel's segment list.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelItem {
    pub title: String,
    pub start_time: f64,
    pub end_time: f64,
    pub active: bool,
}

/// Everything the panel needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub video_id: String,
    pub items: Vec<PanelItem>,
    pub active: Option<usize>,
    pub now_playing: Option<String>,
    pub mode: Mode,
    pub notice: Option<String>,
    pub position: Option<f64>,
    pub playing: bool,
}

impl PanelView {
    pub fn segment_count(&self) -> usize {
        self.items.len()
    }

    pub fn count_label(&self) -> String {
        match self.items.len() {
            1 => "1 segment loaded".to_string(),
            n => format!("{} segments loaded", n),
        }
    }

    pub fn now_playing_label(&self) -> String {
        match &self.now_playing {
            Some(title) => format!("Now playing: {}", title),
            None => "Nothing playing".to_string(),
        }
    }
}

/// Navigator + player for the active video view.
#[derive(Debug)]
pub struct Session<P> {
    video_id: String,
    navigator: SegmentNavigator,
    player: P,
    now_playing: Option<String>,
    notice: Option<String>,
    options: SessionOptions,
}

impl<P: PlayerHandle> Session<P> {
    /// Session with no video loaded yet.
    pub fn new(navigator: SegmentNavigator, player: P, options: SessionOptions) -> Self {
        Self {
            video_id: String::new(),
            navigator,
            player,
            now_playing: None,
            notice: None,
            options,
        }
    }

    /// Switch to a new video view. Any previous position and mode are dropped.
    pub fn navigate(&mut self, video_id: &str, segments: Vec<Segment>) {
        tracing::info!(video_id, count = segments.len(), "navigated to video");
        self.video_id = video_id.to_string();
        self.navigator.load(segments);
        self.now_playing = None;
        self.notice = None;
    }

    /// Apply a panel intent and start playing the resulting segment.
    ///
    /// Failures are also kept as the panel notice.
    pub fn dispatch(&mut self, intent: Intent) -> Result<usize, NavError> {
        let result = match intent {
            Intent::Shuffle => self.navigator.start_shuffle(),
            Intent::Next => self.navigator.advance(),
            Intent::Previous => self.navigator.retreat(),
            Intent::Select(index) => self.navigator.select_explicit(index),
        };

        match result {
            Ok(index) => {
                self.notice = None;
                self.play_segment(index);
            }
            Err(e) => {
                tracing::warn!(?intent, error = %e, "navigation request rejected");
                self.notice = Some(e.to_string());
            }
        }
        result
    }

    /// One boundary check: advance if the playhead has left the current segment.
    ///
    /// Returns the newly selected index when an advance happened.
    pub fn tick(&mut self) -> Option<usize> {
        let auto_advance = match self.navigator.mode() {
            Mode::Shuffled => true,
            Mode::Sequential => self.options.auto_advance_sequential,
        };
        if !auto_advance || !self.player.is_playing() {
            return None;
        }

        let now = self.player.current_time()?;
        if !self.navigator.boundary_crossed(now) {
            return None;
        }

        let index = self.navigator.advance().ok()?;
        tracing::debug!(index, at = now, "segment end reached, advancing");
        self.play_segment(index);
        Some(index)
    }

    pub fn toggle_pause(&mut self) {
        if self.player.is_playing() {
            self.player.pause();
        } else {
            self.player.play();
        }
    }

    /// Snapshot of the current state for rendering.
    pub fn view(&self) -> PanelView {
        let active = self.navigator.current_index();
        let items = self
            .navigator
            .segments()
            .iter()
            .enumerate()
            .map(|(i, segment)| PanelItem {
                title: segment.title.clone(),
                start_time: segment.start_time,
                end_time: segment.end_time,
                active: Some(i) == active,
            })
            .collect();

        PanelView {
            video_id: self.video_id.clone(),
            items,
            active,
            now_playing: self.now_playing.clone(),
            mode: self.navigator.mode(),
            notice: self.notice.clone(),
            position: self.player.current_time(),
            playing: self.player.is_playing(),
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn navigator(&self) -> &SegmentNavigator {
        &self.navigator
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    fn play_segment(&mut self, index: usize) {
        let Some(segment) = self.navigator.segments().get(index) else {
            return;
        };
        tracing::info!(title = %segment.title, start = segment.start_time, "playing segment");
        let (title, start) = (segment.title.clone(), segment.start_time);

        self.player.seek_to(start, true);
        self.player.play();
        self.now_playing = Some(title);
    }
}
