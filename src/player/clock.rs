//! Simulated playhead driven by a monotonic clock.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::PlayerHandle;

/// Monotonic time source.
pub trait Clock: Send {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A player with no media behind it: position advances with the clock
/// while playing, clamped to an optional total duration.
#[derive(Debug)]
pub struct ClockPlayer<C = SystemClock> {
    clock: C,
    /// Position at the last seek/play/pause
    anchor_pos: f64,
    /// Clock reading when playback (re)started; `None` while paused
    playing_since: Option<Duration>,
    duration: Option<f64>,
}

impl<C: Clock> ClockPlayer<C> {
    /// Paused player at position zero.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            anchor_pos: 0.0,
            playing_since: None,
            duration: None,
        }
    }

    /// Stop the playhead at `seconds`, like the end of a real video.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds.max(0.0));
        self
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn position(&self) -> f64 {
        let elapsed = self
            .playing_since
            .map(|since| self.clock.now().saturating_sub(since).as_secs_f64())
            .unwrap_or(0.0);
        self.clamp(self.anchor_pos + elapsed)
    }

    fn clamp(&self, seconds: f64) -> f64 {
        let seconds = seconds.max(0.0);
        match self.duration {
            Some(end) => seconds.min(end),
            None => seconds,
        }
    }
}

impl<C: Clock> PlayerHandle for ClockPlayer<C> {
    fn current_time(&self) -> Option<f64> {
        Some(self.position())
    }

    // Nothing is buffered, so every seek is a seek ahead.
    fn seek_to(&mut self, seconds: f64, _allow_seek_ahead: bool) {
        self.anchor_pos = self.clamp(seconds);
        if self.playing_since.is_some() {
            self.playing_since = Some(self.clock.now());
        }
    }

    fn play(&mut self) {
        if self.playing_since.is_none() {
            self.playing_since = Some(self.clock.now());
        }
    }

    fn pause(&mut self) {
        if self.playing_since.is_some() {
            self.anchor_pos = self.position();
            self.playing_since = None;
        }
    }

    fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }
}
