//! The dashboard feed: two independent tickers publishing into shared
//! display state over a watch channel.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::sim::MetricsSimulator;
use crate::ticker::Ticker;
use crate::types::DashboardSnapshot;

/// Clock cadence: one timestamp publish per second.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);
/// Metrics cadence: one publish of all three simulated values every five seconds.
pub const METRICS_PERIOD: Duration = Duration::from_secs(5);

/// Owns the published snapshot and the two tickers feeding it.
///
/// The snapshot starts at the stock startup values and is overwritten in
/// place on every tick; subscribers always see the latest publish.
pub struct DashboardFeed {
    state: Arc<watch::Sender<DashboardSnapshot>>,
    clock: Ticker,
    metrics: Ticker,
}

impl DashboardFeed {
    /// Start both tickers against fresh display state.
    pub fn spawn<R>(mut simulator: MetricsSimulator<R>) -> Self
    where
        R: Rng + Send + 'static,
    {
        let (tx, _) = watch::channel(DashboardSnapshot::default());
        let state = Arc::new(tx);

        let clock_state = Arc::clone(&state);
        let clock = Ticker::spawn("clock", CLOCK_PERIOD, move || {
            clock_state.send_modify(|s| s.current_time = Local::now());
            debug!("Clock publish.");
        });

        let metrics_state = Arc::clone(&state);
        let metrics = Ticker::spawn("metrics", METRICS_PERIOD, move || {
            let sample = simulator.sample();
            metrics_state.send_modify(|s| s.apply(sample));
        });

        info!("Dashboard feed started.");
        Self {
            state,
            clock,
            metrics,
        }
    }

    /// Subscribe the presentation layer. The receiver starts out holding
    /// the startup snapshot.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.state.subscribe()
    }

    /// Stop both tickers. Idempotent; nothing publishes afterwards.
    pub fn stop(&self) {
        self.clock.cancel();
        self.metrics.cancel();
    }

    /// True once both ticker tasks have wound down.
    pub fn is_stopped(&self) -> bool {
        self.clock.is_finished() && self.metrics.is_finished()
    }
}
