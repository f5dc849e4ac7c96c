//! Schedule (solution) model.
//!
//! A schedule is the complete result of one scheduler run: one outcome
//! per input process, the chronological CPU timeline, and the aggregate
//! metrics derived from the outcomes.

use serde::{Deserialize, Serialize};

use super::ScheduledProcess;
use crate::error::ScheduleError;
use crate::scheduler::Metrics;

/// A contiguous CPU interval `[start, end)` granted to one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that held the CPU.
    pub process_id: String,
    /// First tick of the interval.
    pub start: i64,
    /// Tick at which the interval ended (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the slice covers no ticks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }

    /// Whether two slices share at least one tick.
    pub fn overlaps(&self, other: &Slice) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Result of a single scheduler invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Name of the discipline that produced this schedule.
    pub algorithm: String,
    /// Per-process outcomes, in input order.
    pub processes: Vec<ScheduledProcess>,
    /// CPU timeline, in chronological order.
    pub slices: Vec<Slice>,
    /// Averages over `processes`.
    pub metrics: Metrics,
}

impl Schedule {
    /// Creates a schedule and computes its metrics.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyBatch`] if `processes` is empty.
    pub fn new(
        algorithm: impl Into<String>,
        processes: Vec<ScheduledProcess>,
        slices: Vec<Slice>,
    ) -> Result<Self, ScheduleError> {
        let metrics = Metrics::calculate(&processes)?;
        Ok(Self {
            algorithm: algorithm.into(),
            processes,
            slices,
            metrics,
        })
    }

    /// Creates a schedule with zeroed metrics.
    ///
    /// Used for the empty batch, where averages are undefined.
    pub fn empty(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Default::default()
        }
    }

    /// Latest completion time, or 0 for an empty schedule.
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total ticks the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::len).sum()
    }

    /// Busy time over makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Finds the outcome for a process.
    pub fn process(&self, id: &str) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Returns the CPU slices granted to a process, in order.
    pub fn slices_for(&self, id: &str) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.process_id == id).collect()
    }

    /// Number of scheduled processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_schedule() -> Schedule {
        let p1 = Process::new("P1", 0, 3);
        let p2 = Process::new("P2", 1, 2);
        Schedule {
            algorithm: "RR".into(),
            processes: vec![
                ScheduledProcess::new(&p1, 0, 5),
                ScheduledProcess::new(&p2, 2, 4),
            ],
            slices: vec![
                Slice::new("P1", 0, 2),
                Slice::new("P2", 2, 4),
                Slice::new("P1", 4, 5),
            ],
            metrics: Metrics::default(),
        }
    }

    #[test]
    fn test_slice_len_and_overlap() {
        let a = Slice::new("P1", 0, 3);
        let b = Slice::new("P2", 3, 5);
        let c = Slice::new("P3", 2, 4);
        assert_eq!(a.len(), 3);
        assert!(!a.is_empty());
        assert!(!a.overlaps(&b)); // Touching is not overlapping
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_schedule_makespan_and_busy() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 5);
        assert_eq!(s.busy_time(), 5);
        assert!((s.cpu_utilization().unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_schedule_lookup() {
        let s = sample_schedule();
        assert_eq!(s.process("P2").unwrap().completion_time, 4);
        assert!(s.process("P9").is_none());
        assert_eq!(s.slices_for("P1").len(), 2);
        assert_eq!(s.slices_for("P2").len(), 1);
        assert_eq!(s.process_count(), 2);
    }

    #[test]
    fn test_schedule_new_computes_metrics() {
        let p1 = Process::new("P1", 0, 2);
        let s = Schedule::new(
            "FCFS",
            vec![ScheduledProcess::new(&p1, 0, 2)],
            vec![Slice::new("P1", 0, 2)],
        )
        .unwrap();
        assert!((s.metrics.avg_turnaround - 2.0).abs() < 1e-10);
        assert!((s.metrics.avg_waiting - 0.0).abs() < 1e-10);

        assert_eq!(
            Schedule::new("FCFS", vec![], vec![]),
            Err(ScheduleError::EmptyBatch)
        );
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::empty("RR");
        assert_eq!(s.algorithm, "RR");
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.busy_time(), 0);
        assert!(s.cpu_utilization().is_none());
        assert_eq!(s.metrics, Metrics::default());
    }

    #[test]
    fn test_schedule_serialize() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slices, s.slices);
        assert_eq!(back.processes, s.processes);
    }
}
