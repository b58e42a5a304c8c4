//! Random workload generation.
//!
//! Produces reproducible process lists for experiments and tests. The
//! same seed always yields the same list.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::Process;

/// Generator parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn uniformly from this range.
    pub arrival: RangeInclusive<i64>,
    /// Burst times are drawn uniformly from this range.
    pub burst: RangeInclusive<i64>,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            arrival: 0..=10,
            burst: 1..=10,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival(mut self, arrival: RangeInclusive<i64>) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst(mut self, burst: RangeInclusive<i64>) -> Self {
        self.burst = burst;
        self
    }

    /// Generates processes with IDs `1..=count`, seeded for reproducibility.
    ///
    /// # Errors
    /// `InvalidArgument` if a range is empty, arrivals can be negative, or
    /// bursts can be non-positive.
    pub fn generate(&self, seed: u64) -> Result<Vec<Process>> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    /// Generates processes from the given RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Vec<Process>> {
        if self.arrival.is_empty() || *self.arrival.start() < 0 {
            return Err(SchedError::invalid_argument(format!(
                "arrival range must be non-empty and non-negative, got {:?}",
                self.arrival
            )));
        }
        if self.burst.is_empty() || *self.burst.start() <= 0 {
            return Err(SchedError::invalid_argument(format!(
                "burst range must be non-empty and positive, got {:?}",
                self.burst
            )));
        }

        Ok((1..=self.count as i64)
            .map(|id| {
                let arrival = rng.random_range(self.arrival.clone());
                let burst = rng.random_range(self.burst.clone());
                Process::new(id, arrival, burst)
            })
            .collect())
    }
}
