//! Synthetic process workloads.
//!
//! Generates arrival-ordered process sets from a Bernoulli arrival process:
//! at each tick of the horizon a process arrives with probability
//! `p_arrival`, and is short with probability `p_short`. Generation is
//! deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Process, Ticks};

/// Parameters of a synthetic workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of ticks during which arrivals may occur.
    pub horizon: Ticks,
    /// Probability that a process arrives at a given tick (0.0..=1.0).
    pub p_arrival: f64,
    /// Probability that an arriving process is short (0.0..=1.0).
    pub p_short: f64,
    /// Burst of a short process (> 0).
    pub short_burst: Ticks,
    /// Burst of a long process (> 0).
    pub long_burst: Ticks,
    /// Priorities are drawn uniformly from `0..=max_priority`.
    pub max_priority: i64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            horizon: 100,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            max_priority: 4,
            seed: 0,
        }
    }
}

impl WorkloadSpec {
    /// Creates the default workload (100 ticks, 30% arrivals, bursts 2/6).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival horizon.
    pub fn with_horizon(mut self, horizon: Ticks) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.p_arrival = p;
        self
    }

    /// Sets the short/long burst lengths and the probability of a short one.
    pub fn with_bursts(mut self, short_burst: Ticks, long_burst: Ticks, p_short: f64) -> Self {
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self.p_short = p_short;
        self
    }

    /// Sets the maximum priority value.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set.
    ///
    /// IDs are assigned sequentially from 1 in arrival order.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let p_arrival = self.p_arrival.clamp(0.0, 1.0);
        let p_short = self.p_short.clamp(0.0, 1.0);
        let max_priority = self.max_priority.max(0);
        let mut processes = Vec::new();

        for t in 0..self.horizon.max(0) {
            if rng.random::<f64>() >= p_arrival {
                continue;
            }
            let burst = if rng.random::<f64>() < p_short {
                self.short_burst
            } else {
                self.long_burst
            };
            let priority = rng.random_range(0..=max_priority);

            processes.push(
                Process::new(processes.len() as i64 + 1, t, burst).with_priority(priority),
            );
        }

        log::debug!(
            "generated {} processes over {} ticks (seed {})",
            processes.len(),
            self.horizon,
            self.seed
        );
        processes
    }
}
