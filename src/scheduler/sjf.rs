//! Shortest-Job-First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable).
//! 2. At each decision point, pick the shortest burst among arrived,
//!    uncompleted processes. Ties go to the earliest in arrival order.
//! 3. If nothing has arrived, jump the clock to the next arrival.
//! 4. Run the selected process to completion.
//!
//! # Complexity
//! O(n²): one linear scan per dispatch.
//!
//! # Reference
//! Smith (1956): SPT ordering minimizes mean flow time on a single machine.

use super::{arrival_order, check_batch, CpuScheduler};
use crate::error::ScheduleError;
use crate::models::{Process, Schedule, ScheduledProcess, Slice};
use crate::{log_changes, log_checks};

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone, Default)]
pub struct Sjf {
    verbosity: u8,
}

impl Sjf {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Position in `order` of the shortest arrived, uncompleted process.
    fn select_shortest(
        processes: &[Process],
        order: &[usize],
        completed: &[bool],
        current_time: i64,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_burst = i64::MAX;

        for (pos, &idx) in order.iter().enumerate() {
            let p = &processes[idx];
            if !completed[pos] && p.arrival_time <= current_time && p.burst_time < best_burst {
                best_burst = p.burst_time;
                best = Some(pos);
            }
        }

        best
    }

    /// Earliest arrival among uncompleted processes.
    fn next_arrival(processes: &[Process], order: &[usize], completed: &[bool]) -> Option<i64> {
        order
            .iter()
            .zip(completed)
            .filter(|&(_, &done)| !done)
            .map(|(&idx, _)| processes[idx].arrival_time)
            .min()
    }
}

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        check_batch(processes)?;
        if processes.is_empty() {
            return Err(ScheduleError::EmptyBatch);
        }

        let order = arrival_order(processes);
        let mut completed = vec![false; order.len()];
        let mut outcomes: Vec<Option<ScheduledProcess>> = vec![None; processes.len()];
        let mut slices = Vec::with_capacity(processes.len());
        let mut remaining = order.len();
        let mut current_time: i64 = 0;

        while remaining > 0 {
            let Some(pos) = Self::select_shortest(processes, &order, &completed, current_time)
            else {
                // Nothing ready: every uncompleted process arrives later.
                let Some(next) = Self::next_arrival(processes, &order, &completed) else {
                    break;
                };
                log_checks!(
                    self.verbosity,
                    "[SJF] t={}: idle until {}",
                    current_time,
                    next
                );
                current_time = next;
                continue;
            };

            let idx = order[pos];
            let p = &processes[idx];
            let start = current_time;
            current_time += p.burst_time;
            log_changes!(
                self.verbosity,
                "[SJF] {} (burst {}) runs {}..{}",
                p.id,
                p.burst_time,
                start,
                current_time
            );

            slices.push(Slice::new(p.id.clone(), start, current_time));
            outcomes[idx] = Some(ScheduledProcess::new(p, start, current_time));
            completed[pos] = true;
            remaining -= 1;
        }

        Schedule::new(self.name(), outcomes.into_iter().flatten().collect(), slices)
    }
}
