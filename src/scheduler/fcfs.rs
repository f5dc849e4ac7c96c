//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable: ties keep input order).
//! 2. Walk them with a single time cursor starting at 0.
//! 3. If the CPU would idle before a process arrives, jump to its arrival.
//! 4. Run each process to completion in one contiguous slice.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use super::{arrival_order, check_batch, CpuScheduler};
use crate::error::ScheduleError;
use crate::log_changes;
use crate::models::{Process, Schedule, ScheduledProcess, Slice};

/// Non-preemptive FCFS scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{CpuScheduler, Fcfs};
///
/// let batch = vec![Process::new("P0", 0, 5), Process::new("P1", 1, 3)];
/// let schedule = Fcfs::new().schedule(&batch).unwrap();
///
/// assert_eq!(schedule.process("P1").unwrap().start_time, 5);
/// assert!((schedule.metrics.avg_waiting - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fcfs {
    verbosity: u8,
}

impl Fcfs {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        check_batch(processes)?;
        if processes.is_empty() {
            return Err(ScheduleError::EmptyBatch);
        }

        let mut outcomes: Vec<Option<ScheduledProcess>> = vec![None; processes.len()];
        let mut slices = Vec::with_capacity(processes.len());
        let mut current_time: i64 = 0;

        for idx in arrival_order(processes) {
            let p = &processes[idx];
            if current_time < p.arrival_time {
                current_time = p.arrival_time;
            }

            let start = current_time;
            current_time += p.burst_time;
            log_changes!(
                self.verbosity,
                "[FCFS] {} runs {}..{}",
                p.id,
                start,
                current_time
            );

            slices.push(Slice::new(p.id.clone(), start, current_time));
            outcomes[idx] = Some(ScheduledProcess::new(p, start, current_time));
        }

        Schedule::new(self.name(), outcomes.into_iter().flatten().collect(), slices)
    }
}
