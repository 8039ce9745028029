//! Bounded sample history for the network sparkline.

use std::collections::VecDeque;

// Keeps the most recent `cap` readings, oldest first
pub struct BoundedSeries {
    points: VecDeque<u64>,
    cap: usize,
}

impl BoundedSeries {
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn push(&mut self, v: u64) {
        if self.points.len() == self.cap {
            self.points.pop_front();
        }
        self.points.push_back(v);
    }

    /// Latest `n` points in order, sized for a sparkline `n` columns wide.
    pub fn tail(&self, n: usize) -> Vec<u64> {
        let start = self.points.len().saturating_sub(n);
        self.points.iter().skip(start).copied().collect()
    }
}
