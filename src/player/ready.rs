//! Bounded wait for a player to become ready.

use std::thread;
use std::time::Duration;

use super::PlayerHandle;

/// How long to wait for a player before proceeding anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyPolicy {
    /// Pause between readiness checks
    pub interval: Duration,
    /// Checks to make before giving up
    pub max_attempts: u32,
}

impl Default for ReadyPolicy {
    /// 40 checks, 500 ms apart: twenty seconds at most.
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            max_attempts: 40,
        }
    }
}

/// Outcome of [`wait_for_player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready { attempts: u32 },
    GaveUp { attempts: u32 },
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready { .. })
    }
}

/// Poll `player.is_ready()` until it holds or the attempts run out.
///
/// Giving up is not an error: the caller carries on with the handle as is.
pub fn wait_for_player<P: PlayerHandle + ?Sized>(player: &P, policy: &ReadyPolicy) -> Readiness {
    for attempt in 1..=policy.max_attempts {
        if player.is_ready() {
            tracing::debug!(attempts = attempt, "player ready");
            return Readiness::Ready { attempts: attempt };
        }
        if attempt < policy.max_attempts {
            thread::sleep(policy.interval);
        }
    }

    tracing::warn!(
        attempts = policy.max_attempts,
        "player took too long to become ready, proceeding anyway"
    );
    Readiness::GaveUp {
        attempts: policy.max_attempts,
    }
}
