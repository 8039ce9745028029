//! Range-driven random generators for the simulated metrics.
//! Each metric draws independently and uniformly from an inclusive range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::types::MetricSample;

// Stock dashboard ranges, inclusive on both ends
pub const CPU_PERCENT_RANGE: (u8, u8) = (20, 75);
pub const MEMORY_GB_RANGE: (f64, f64) = (4.0, 10.0);
pub const NETWORK_MBPS_RANGE: (u16, u16) = (500, 1200);

#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("{metric} range is empty: min {min} is greater than max {max}")]
    Empty {
        metric: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{metric} range has a non-finite bound: {min}..={max}")]
    NonFinite {
        metric: &'static str,
        min: f64,
        max: f64,
    },
}

/// Inclusive min/max per metric. `Default` is the stock dashboard profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimRanges {
    pub cpu_percent: (u8, u8),
    pub memory_gb: (f64, f64),
    pub network_mbps: (u16, u16),
}

impl Default for SimRanges {
    fn default() -> Self {
        Self {
            cpu_percent: CPU_PERCENT_RANGE,
            memory_gb: MEMORY_GB_RANGE,
            network_mbps: NETWORK_MBPS_RANGE,
        }
    }
}

impl SimRanges {
    /// Reject ranges no draw could satisfy. Memory bounds must be
    /// finite, so NaN and infinities fail here too.
    pub fn validate(&self) -> Result<(), RangeError> {
        let (min, max) = self.cpu_percent;
        if min > max {
            return Err(RangeError::Empty {
                metric: "cpu_percent",
                min: min.into(),
                max: max.into(),
            });
        }
        let (min, max) = self.memory_gb;
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite {
                metric: "memory_gb",
                min,
                max,
            });
        }
        if min > max {
            return Err(RangeError::Empty {
                metric: "memory_gb",
                min,
                max,
            });
        }
        let (min, max) = self.network_mbps;
        if min > max {
            return Err(RangeError::Empty {
                metric: "network_mbps",
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(())
    }
}

/// Draws dashboard metrics from their configured ranges.
///
/// Generic over the RNG so tests can pin the unit draw to an exact
/// endpoint; production uses `StdRng`, seeded or from OS entropy.
pub struct MetricsSimulator<R = StdRng> {
    ranges: SimRanges,
    rng: R,
}

impl MetricsSimulator<StdRng> {
    pub fn new(ranges: SimRanges) -> Result<Self, RangeError> {
        Self::with_rng(ranges, StdRng::from_os_rng())
    }

    /// Deterministic simulator: the same seed replays the same sequence.
    pub fn seeded(ranges: SimRanges, seed: u64) -> Result<Self, RangeError> {
        Self::with_rng(ranges, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MetricsSimulator<R> {
    pub fn with_rng(ranges: SimRanges, rng: R) -> Result<Self, RangeError> {
        ranges.validate()?;
        Ok(Self { ranges, rng })
    }

    /// One tick's worth of metrics: three independent draws.
    pub fn sample(&mut self) -> MetricSample {
        let (cpu_min, cpu_max) = self.ranges.cpu_percent;
        let (mem_min, mem_max) = self.ranges.memory_gb;
        let (net_min, net_max) = self.ranges.network_mbps;

        let cpu_percent =
            cpu_min + scaled_int(self.rng.random::<f64>(), u64::from(cpu_max - cpu_min)) as u8;
        let memory_gb = round1(mem_min + self.rng.random::<f64>() * (mem_max - mem_min));
        let network_mbps =
            net_min + scaled_int(self.rng.random::<f64>(), u64::from(net_max - net_min)) as u16;

        debug!(cpu_percent, memory_gb, network_mbps, "Simulated metrics sample.");
        MetricSample {
            cpu_percent,
            memory_gb,
            network_mbps,
        }
    }
}

// Map a unit draw in [0, 1) onto 0..=span: scale by span + 1 and floor
fn scaled_int(unit: f64, span: u64) -> u64 {
    (unit * (span as f64 + 1.0)) as u64
}

/// Round to one decimal place: scale by ten, round half away from zero,
/// scale back.
pub fn round1(gb: f64) -> f64 {
    (gb * 10.0).round() / 10.0
}
