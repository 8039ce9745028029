//! Display-state types published to the dashboard.
//! Keep this module minimal and stable: it defines what the UI renders.

use chrono::{DateTime, Local};
use serde::Serialize;

// Values shown on startup, before either timer has fired
pub const STARTUP_CPU_PERCENT: u8 = 42;
pub const STARTUP_MEMORY_GB: f64 = 6.2;
pub const STARTUP_NETWORK_MBPS: u16 = 980;

/// One metrics tick: all three simulated values, drawn together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    pub cpu_percent: u8,
    pub memory_gb: f64,
    pub network_mbps: u16,
}

#[derive(Debug, Serialize, Clone)]
pub struct DashboardSnapshot {
    pub cpu_percent: u8,
    pub memory_gb: f64,
    pub network_mbps: u16,
    pub current_time: DateTime<Local>,
}

impl DashboardSnapshot {
    /// Overwrite the three metric fields, leaving the clock untouched.
    pub fn apply(&mut self, sample: MetricSample) {
        self.cpu_percent = sample.cpu_percent;
        self.memory_gb = sample.memory_gb;
        self.network_mbps = sample.network_mbps;
    }
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self {
            cpu_percent: STARTUP_CPU_PERCENT,
            memory_gb: STARTUP_MEMORY_GB,
            network_mbps: STARTUP_NETWORK_MBPS,
            current_time: Local::now(),
        }
    }
}
