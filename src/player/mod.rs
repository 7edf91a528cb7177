//! Player handle abstraction
//!
//! The navigator never drives playback itself. A [`PlayerHandle`] supplies the
//! playback clock and accepts seek/play commands from the session driver.
//!
//! # Architecture
//!
//! - `clock`: [`ClockPlayer`], a simulated playhead over a monotonic [`Clock`]
//! - `ready`: [`wait_for_player`], the bounded readiness wait
//!
//! # Usage
//!
//! ```
//! use segshuf::player::{ClockPlayer, ManualClock, PlayerHandle};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut player = ClockPlayer::new(clock.clone());
//! player.seek_to(30.0, true);
//! player.play();
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(player.current_time(), Some(35.0));
//! ```

mod clock;
mod ready;

pub use clock::{Clock, ClockPlayer, ManualClock, SystemClock};
pub use ready::{wait_for_player, ReadyPolicy, Readiness};

/// Handle on whatever is actually playing the video.
///
/// Every method is best effort: a handle that is not ready reports no time
/// and ignores commands instead of failing.
pub trait PlayerHandle: Send {
    /// Whether the player can report time and accept commands yet.
    fn is_ready(&self) -> bool {
        true
    }

    /// Current playback position in seconds, if available.
    fn current_time(&self) -> Option<f64>;

    /// Jump to `seconds`. `allow_seek_ahead` permits seeking past buffered data.
    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool);

    fn play(&mut self);

    fn pause(&mut self);

    fn is_playing(&self) -> bool;
}
