//! Cancelable repeating timer: runs a callback once per period until
//! stopped or dropped.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info};

/// Handle to a repeating background task.
///
/// Cancellation is idempotent, and once the task observes it no further
/// callback runs. Dropping the handle cancels too, so a ticker cannot
/// outlive its owner.
pub struct Ticker {
    shutdown: watch::Sender<()>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawn `tick` on a fixed `period`. The first run fires one full
    /// period after this call, so startup state stays visible until then.
    pub fn spawn<F>(label: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (shutdown, mut stop) = watch::channel(());
        // Anchor the schedule here, not at first poll of the task
        let first_fire = Instant::now() + period;
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(first_fire, period);
            info!(ticker = label, period_ms = period.as_millis() as u64, "Ticker started.");
            loop {
                tokio::select! {
                    biased;

                    _ = stop.changed() => break,
                    _ = interval.tick() => tick(),
                }
            }
            debug!(ticker = label, "Ticker stopped.");
        });
        Self { shutdown, task }
    }

    /// Ask the task to stop before its next tick. Safe to call repeatedly.
    pub fn cancel(&self) {
        // Send fails once the task has exited and dropped its receiver
        let _ = self.shutdown.send(());
    }

    /// True once the background task has fully wound down.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
        // Nothing may fire after the owner is gone, even if the task is
        // never polled again
        self.task.abort();
    }
}
