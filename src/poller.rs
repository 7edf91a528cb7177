//! Cancellable repeating task
//!
//! Runs a tick function on a dedicated thread at a fixed interval. The
//! returned [`PollHandle`] owns the thread: cancelling (or dropping) it wakes
//! the thread immediately rather than waiting out the interval, so two pollers
//! for the same view never run side by side.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Spawns repeating tasks.
pub struct Poller;

impl Poller {
    /// Call `tick` every `interval` until the handle is cancelled.
    ///
    /// The first tick happens one interval after spawning.
    pub fn spawn<F>(name: &str, interval: Duration, mut tick: F) -> PollHandle
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let thread_name = format!("poll-{}", name);
        let label = name.to_string();

        let join = thread::Builder::new()
            .name(thread_name)
            .spawn(move || loop {
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => tick(),
                    // Cancel message or every sender dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        tracing::debug!(poller = %label, "poller stopped");
                        break;
                    }
                }
            });

        match join {
            Ok(join) => PollHandle {
                cancel_tx: Some(cancel_tx),
                join: Some(join),
            },
            Err(e) => {
                tracing::error!(poller = name, error = %e, "failed to spawn poller thread");
                PollHandle {
                    cancel_tx: None,
                    join: None,
                }
            }
        }
    }
}

/// Owning handle for a running poller.
#[derive(Debug)]
pub struct PollHandle {
    cancel_tx: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Stop the poller and wait for its thread to exit.
    ///
    /// A tick that is already running finishes first. Safe to call twice.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            // Thread may already be gone
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                tracing::error!("poller thread panicked");
            }
        }
    }

    /// Whether the poller thread is still alive.
    pub fn is_running(&self) -> bool {
        self.join.as_ref().is_some_and(|join| !join.is_finished())
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
