//! Schedule performance metrics.
//!
//! Reduces a completed schedule to per-batch averages.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(first dispatch - arrival) |

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::ScheduledProcess;

/// Average timing indicators over one batch, in ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean time from arrival to completion.
    pub avg_turnaround: f64,
    /// Mean time spent ready but not running.
    pub avg_waiting: f64,
    /// Mean time from arrival to first dispatch.
    pub avg_response: f64,
}

impl Metrics {
    /// Computes the averages over a set of completed processes.
    ///
    /// Pure: calling it again on the same slice yields the same value.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyBatch`] if `processes` is empty.
    pub fn calculate(processes: &[ScheduledProcess]) -> Result<Self, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyBatch);
        }

        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut total_response: i64 = 0;

        for p in processes {
            total_turnaround += p.turnaround();
            total_waiting += p.waiting();
            total_response += p.response();
        }

        let n = processes.len() as f64;
        Ok(Self {
            avg_turnaround: total_turnaround as f64 / n,
            avg_waiting: total_waiting as f64 / n,
            avg_response: total_response as f64 / n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn done(id: &str, arrival: i64, burst: i64, start: i64, completion: i64) -> ScheduledProcess {
        ScheduledProcess::new(&Process::new(id, arrival, burst), start, completion)
    }

    #[test]
    fn test_metrics_basic() {
        let processes = vec![done("P0", 0, 5, 0, 5), done("P1", 1, 3, 5, 8)];

        let m = Metrics::calculate(&processes).unwrap();
        // Turnaround: 5, 7 → 6.0
        assert!((m.avg_turnaround - 6.0).abs() < 1e-10);
        // Waiting: 0, 4 → 2.0
        assert!((m.avg_waiting - 2.0).abs() < 1e-10);
        // Response: 0, 4 → 2.0
        assert!((m.avg_response - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_fractional() {
        let processes = vec![
            done("P0", 0, 5, 0, 9),
            done("P1", 1, 3, 2, 8),
            done("P2", 2, 1, 4, 5),
        ];

        let m = Metrics::calculate(&processes).unwrap();
        assert!((m.avg_turnaround - 19.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_response - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_idempotent() {
        let processes = vec![done("P0", 0, 2, 0, 2), done("P1", 0, 2, 2, 4)];
        let first = Metrics::calculate(&processes).unwrap();
        let second = Metrics::calculate(&processes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_metrics_empty() {
        assert_eq!(Metrics::calculate(&[]), Err(ScheduleError::EmptyBatch));
    }

    #[test]
    fn test_metrics_default_is_zero() {
        let m = Metrics::default();
        assert_eq!(m.avg_turnaround, 0.0);
        assert_eq!(m.avg_waiting, 0.0);
        assert_eq!(m.avg_response, 0.0);
    }
}
