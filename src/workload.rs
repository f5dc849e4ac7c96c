//! Random process batches.
//!
//! Generates reproducible workloads for benchmarking the disciplines
//! against each other. Every generated batch passes validation: IDs are
//! unique, arrivals are non-negative and bursts positive.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for random batch generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes per batch.
    pub count: usize,
    /// Latest possible arrival tick (inclusive).
    pub max_arrival: i64,
    /// Shortest possible burst (inclusive, clamped to at least 1).
    pub min_burst: i64,
    /// Longest possible burst (inclusive).
    pub max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes arriving in `0..=20`
    /// with bursts in `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Generates a batch with IDs `P0..P{count-1}`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);

        (0..self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                )
            })
            .collect()
    }

    /// Generates a batch from a fixed seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_batch;

    #[test]
    fn test_generate_within_bounds() {
        let generator = WorkloadGenerator::new(50)
            .with_max_arrival(15)
            .with_burst_range(2, 6);
        let batch = generator.generate_seeded(7);

        assert_eq!(batch.len(), 50);
        assert_eq!(batch[0].id, "P0");
        assert_eq!(batch[49].id, "P49");
        for p in &batch {
            assert!((0..=15).contains(&p.arrival_time));
            assert!((2..=6).contains(&p.burst_time));
        }
        assert!(validate_batch(&batch).is_ok());
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let generator = WorkloadGenerator::default();
        assert_eq!(generator.generate_seeded(42), generator.generate_seeded(42));
    }

    #[test]
    fn test_degenerate_ranges_are_clamped() {
        let generator = WorkloadGenerator::new(10)
            .with_max_arrival(-5)
            .with_burst_range(0, -1);
        let batch = generator.generate_seeded(1);

        for p in &batch {
            assert_eq!(p.arrival_time, 0);
            assert_eq!(p.burst_time, 1);
        }
        assert!(validate_batch(&batch).is_ok());
    }

    #[test]
    fn test_zero_count() {
        assert!(WorkloadGenerator::new(0).generate_seeded(3).is_empty());
    }
}
