//! Generator tests: range bounds, rounding, seeding, validation.

use mocktop_sim::sim::{round1, MetricsSimulator, RangeError, SimRanges};
use mocktop_sim::types::DashboardSnapshot;
use rand::RngCore;

// RNG that returns the same word forever, pinning the unit draw in
// [0, 1) to an exact value. All zeros gives 0.0; all ones gives the
// largest double below 1.0.
struct ConstRng(u64);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }
    fn next_u64(&mut self) -> u64 {
        self.0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

#[test]
fn samples_stay_in_their_declared_ranges() {
    let mut sim = MetricsSimulator::seeded(SimRanges::default(), 42).expect("stock ranges");
    for _ in 0..1000 {
        let s = sim.sample();
        assert!((20..=75).contains(&s.cpu_percent), "cpu {} out of range", s.cpu_percent);
        assert!(
            (4.0..=10.0).contains(&s.memory_gb),
            "memory {} out of range",
            s.memory_gb
        );
        assert!(
            (500..=1200).contains(&s.network_mbps),
            "network {} out of range",
            s.network_mbps
        );
    }
}

#[test]
fn memory_lands_on_a_tenth_of_a_gb() {
    let mut sim = MetricsSimulator::seeded(SimRanges::default(), 7).expect("stock ranges");
    for _ in 0..1000 {
        let gb = sim.sample().memory_gb;
        let scaled = gb * 10.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "memory {gb} has more than one decimal digit"
        );
    }
}

#[test]
fn forced_minimum_draw_hits_every_lower_bound() {
    let mut sim = MetricsSimulator::with_rng(SimRanges::default(), ConstRng(0)).expect("stock ranges");
    let s = sim.sample();
    assert_eq!(s.cpu_percent, 20);
    assert_eq!(s.memory_gb, 4.0);
    assert_eq!(s.network_mbps, 500);
}

#[test]
fn forced_maximum_draw_hits_every_upper_bound() {
    let mut sim =
        MetricsSimulator::with_rng(SimRanges::default(), ConstRng(u64::MAX)).expect("stock ranges");
    let s = sim.sample();
    assert_eq!(s.cpu_percent, 75);
    assert_eq!(s.memory_gb, 10.0);
    assert_eq!(s.network_mbps, 1200);
}

#[test]
fn seeded_simulators_replay_the_same_sequence() {
    let mut a = MetricsSimulator::seeded(SimRanges::default(), 9).expect("stock ranges");
    let mut b = MetricsSimulator::seeded(SimRanges::default(), 9).expect("stock ranges");
    for _ in 0..32 {
        assert_eq!(a.sample(), b.sample());
    }
}

#[test]
fn single_point_ranges_always_return_that_point() {
    let ranges = SimRanges {
        cpu_percent: (5, 5),
        memory_gb: (2.0, 2.0),
        network_mbps: (100, 100),
    };
    let mut sim = MetricsSimulator::seeded(ranges, 3).expect("single-point ranges are valid");
    for _ in 0..10 {
        let s = sim.sample();
        assert_eq!(s.cpu_percent, 5);
        assert_eq!(s.memory_gb, 2.0);
        assert_eq!(s.network_mbps, 100);
    }
}

#[test]
fn empty_ranges_are_rejected_up_front() {
    let mut ranges = SimRanges::default();
    ranges.cpu_percent = (80, 20);
    assert!(matches!(
        MetricsSimulator::seeded(ranges, 1),
        Err(RangeError::Empty {
            metric: "cpu_percent",
            ..
        })
    ));

    let mut ranges = SimRanges::default();
    ranges.memory_gb = (12.0, 4.0);
    assert!(matches!(
        ranges.validate(),
        Err(RangeError::Empty {
            metric: "memory_gb",
            ..
        })
    ));

    assert!(SimRanges::default().validate().is_ok());
}

#[test]
fn non_finite_memory_bounds_are_rejected() {
    for memory_gb in [
        (4.0, f64::INFINITY),
        (f64::NEG_INFINITY, 10.0),
        (f64::NAN, 10.0),
        (4.0, f64::NAN),
    ] {
        let ranges = SimRanges {
            memory_gb,
            ..SimRanges::default()
        };
        assert!(
            matches!(
                MetricsSimulator::seeded(ranges, 1),
                Err(RangeError::NonFinite {
                    metric: "memory_gb",
                    ..
                })
            ),
            "bounds {memory_gb:?} must not validate"
        );
    }
}

#[test]
fn round1_rounds_half_away_from_zero() {
    // 4.25 and 6.25 are exact in binary, so they sit exactly on the
    // halfway point; away-from-zero pushes both up
    assert_eq!(round1(4.25), 4.3);
    assert_eq!(round1(6.25), 6.3);
    assert_eq!(round1(4.26), 4.3);
    assert_eq!(round1(4.04), 4.0);
    assert_eq!(round1(9.96), 10.0);
    assert_eq!(round1(4.0), 4.0);
}

#[test]
fn startup_snapshot_uses_the_stock_defaults() {
    let s = DashboardSnapshot::default();
    assert_eq!(s.cpu_percent, 42);
    assert_eq!(s.memory_gb, 6.2);
    assert_eq!(s.network_mbps, 980);
}
