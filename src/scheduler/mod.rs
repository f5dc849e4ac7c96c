//! CPU schedulers and metrics.
//!
//! Provides three single-CPU disciplines behind one trait, plus the
//! metrics they all report.
//!
//! # Disciplines
//!
//! | Scheduler | Preemptive | Ordering |
//! |-----------|-----------|----------|
//! | `Fcfs` | No | Arrival time |
//! | `Sjf` | No | Shortest burst among arrived |
//! | `RoundRobin` | Yes (quantum) | FIFO ready queue |
//!
//! Every scheduler reads a batch and returns a new [`Schedule`]; the
//! batch itself is never modified and can be reused.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod metrics;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use metrics::Metrics;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use crate::error::ScheduleError;
use crate::models::{Process, Schedule};
use crate::validation::validate_batch;

/// A single-CPU scheduling discipline.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Discipline name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the batch to completion.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidBatch`] if the batch fails validation;
    /// [`ScheduleError::EmptyBatch`] for disciplines without a defined
    /// result over zero processes.
    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError>;
}

/// Runs FCFS and returns its metrics.
pub fn fcfs_metrics(processes: &[Process]) -> Result<Metrics, ScheduleError> {
    Ok(Fcfs::new().schedule(processes)?.metrics)
}

/// Runs non-preemptive SJF and returns its metrics.
pub fn sjf_metrics(processes: &[Process]) -> Result<Metrics, ScheduleError> {
    Ok(Sjf::new().schedule(processes)?.metrics)
}

/// Runs Round Robin and returns its metrics.
///
/// An empty batch yields zeroed metrics.
pub fn rr_metrics(processes: &[Process], time_quantum: i64) -> Result<Metrics, ScheduleError> {
    Ok(RoundRobin::new(time_quantum)?.schedule(processes)?.metrics)
}

/// Runs FCFS, SJF and Round Robin on the same batch, in that order.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::compare;
///
/// let batch = vec![Process::new("P0", 0, 6), Process::new("P1", 0, 1)];
/// let results = compare(&batch, 2).unwrap();
///
/// let names: Vec<&str> = results.iter().map(|s| s.algorithm.as_str()).collect();
/// assert_eq!(names, vec!["FCFS", "SJF", "RR"]);
/// ```
pub fn compare(processes: &[Process], time_quantum: i64) -> Result<Vec<Schedule>, ScheduleError> {
    let schedulers: [Box<dyn CpuScheduler>; 3] = [
        Box::new(Fcfs::new()),
        Box::new(Sjf::new()),
        Box::new(RoundRobin::new(time_quantum)?),
    ];
    schedulers.iter().map(|s| s.schedule(processes)).collect()
}

/// Indices of `processes` sorted by arrival time; ties keep input order.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);
    order
}

pub(crate) fn check_batch(processes: &[Process]) -> Result<(), ScheduleError> {
    validate_batch(processes).map_err(ScheduleError::InvalidBatch)
}
