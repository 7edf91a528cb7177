//! Session plus boundary poller, with explicit navigation between videos.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::{Intent, PanelView, Session};
use crate::navigator::NavError;
use crate::player::{wait_for_player, PlayerHandle, ReadyPolicy, Readiness};
use crate::poller::{PollHandle, Poller};
use crate::segment::{load_or_empty, SegmentSource};

/// Owns the shared [`Session`] and the poller that auto-advances it.
///
/// Navigating to another video cancels the running poller before the new
/// segment list is loaded, then starts a fresh one.
pub struct Shuffler<P: PlayerHandle + 'static> {
    session: Arc<Mutex<Session<P>>>,
    source: Box<dyn SegmentSource>,
    poll_interval: Duration,
    ready_policy: ReadyPolicy,
    poller: Option<PollHandle>,
}

impl<P: PlayerHandle + 'static> Shuffler<P> {
    pub fn new(
        session: Session<P>,
        source: Box<dyn SegmentSource>,
        poll_interval: Duration,
        ready_policy: ReadyPolicy,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            source,
            poll_interval,
            ready_policy,
            poller: None,
        }
    }

    /// Load `video_id` and start polling for segment ends.
    pub fn navigate(&mut self, video_id: &str) -> Readiness {
        self.stop();

        let segments = load_or_empty(self.source.as_ref(), video_id);
        let readiness = {
            let mut session = lock(&self.session);
            let readiness = wait_for_player(session.player(), &self.ready_policy);
            session.navigate(video_id, segments);
            readiness
        };

        let session = Arc::clone(&self.session);
        self.poller = Some(Poller::spawn("segment-boundary", self.poll_interval, move || {
            lock(&session).tick();
        }));
        readiness
    }

    pub fn dispatch(&self, intent: Intent) -> Result<usize, NavError> {
        lock(&self.session).dispatch(intent)
    }

    pub fn toggle_pause(&self) {
        lock(&self.session).toggle_pause();
    }

    pub fn view(&self) -> PanelView {
        lock(&self.session).view()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut Session<P>) -> R) -> R {
        f(&mut lock(&self.session))
    }

    /// Cancel the boundary poller, if one is running.
    pub fn stop(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            poller.cancel();
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(PollHandle::is_running)
    }
}

impl<P: PlayerHandle + 'static> Drop for Shuffler<P> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Lock the session, recovering from a poisoned mutex.
fn lock<P>(session: &Mutex<Session<P>>) -> MutexGuard<'_, Session<P>> {
    session.lock().unwrap_or_else(|e| e.into_inner())
}
