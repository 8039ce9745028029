//! Simulated dashboard feed: two timers publish random metrics and a
//! wall-clock timestamp into shared display state. No real system is
//! ever inspected; every value is generated.

pub mod feed;
pub mod sim;
pub mod ticker;
pub mod types;

pub use feed::{DashboardFeed, CLOCK_PERIOD, METRICS_PERIOD};
pub use sim::{MetricsSimulator, RangeError, SimRanges};
pub use ticker::Ticker;
pub use types::{DashboardSnapshot, MetricSample};
