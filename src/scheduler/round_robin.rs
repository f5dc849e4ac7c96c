//! Round Robin scheduler.
//!
//! # Algorithm
//!
//! A tick-driven simulation. Each tick runs four phases in a fixed order:
//!
//! 1. **Admission**: processes arriving at this tick join the ready queue
//!    in ascending index order, unless already running or queued.
//! 2. **Execution**: the running process consumes one unit of burst. If it
//!    finishes, its completion is stamped with the current tick. If its
//!    quantum is exhausted, it goes to the tail of the ready queue.
//! 3. **Dispatch**: an idle CPU takes the head of the ready queue.
//! 4. **Advance**: the clock moves forward until every process completes.
//!
//! Arrivals are admitted before a preempted process is re-queued, so a
//! process arriving on the same tick as a quantum expiry runs first.
//!
//! # Complexity
//! O(T · n) where T is the makespan.

use std::collections::VecDeque;

use super::{check_batch, CpuScheduler};
use crate::error::ScheduleError;
use crate::models::{Process, Schedule, ScheduledProcess, Slice};
use crate::{log_changes, log_checks, log_debug};

/// Preemptive, time-sliced scheduler with a FIFO ready queue.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{CpuScheduler, RoundRobin};
///
/// let batch = vec![
///     Process::new("P0", 0, 5),
///     Process::new("P1", 1, 3),
///     Process::new("P2", 2, 1),
/// ];
/// let schedule = RoundRobin::new(2).unwrap().schedule(&batch).unwrap();
///
/// assert_eq!(schedule.process("P0").unwrap().completion_time, 9);
/// assert_eq!(schedule.busy_time(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobin {
    time_quantum: i64,
    verbosity: u8,
}

/// The process currently holding the CPU.
#[derive(Debug, Clone, Copy)]
struct Running {
    index: usize,
    quantum_used: i64,
    slice_start: i64,
}

/// Per-run simulator state. Dropped when `schedule` returns.
struct Simulation<'a> {
    processes: &'a [Process],
    remaining: Vec<i64>,
    first_dispatch: Vec<Option<i64>>,
    completion: Vec<Option<i64>>,
    ready: VecDeque<usize>,
    running: Option<Running>,
    slices: Vec<Slice>,
    completed: usize,
}

impl RoundRobin {
    /// Creates a scheduler with the given quantum.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidQuantum`] if `time_quantum <= 0`.
    pub fn new(time_quantum: i64) -> Result<Self, ScheduleError> {
        if time_quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(time_quantum));
        }
        Ok(Self {
            time_quantum,
            verbosity: 0,
        })
    }

    /// Sets the log verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// The configured quantum.
    pub fn time_quantum(&self) -> i64 {
        self.time_quantum
    }
}

impl<'a> Simulation<'a> {
    fn new(processes: &'a [Process]) -> Self {
        let n = processes.len();
        Self {
            processes,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            first_dispatch: vec![None; n],
            completion: vec![None; n],
            ready: VecDeque::with_capacity(n),
            running: None,
            slices: Vec::new(),
            completed: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.completed == self.processes.len()
    }

    fn is_resident(&self, index: usize) -> bool {
        self.running.is_some_and(|r| r.index == index) || self.ready.contains(&index)
    }

    fn enqueue(&mut self, index: usize) {
        self.ready.push_back(index);
        assert!(
            self.ready.len() <= self.processes.len(),
            "ready queue holds more entries than processes"
        );
    }

    fn admit_arrivals(&mut self, now: i64, verbosity: u8) {
        let processes = self.processes;
        for (index, p) in processes.iter().enumerate() {
            if self.completion[index].is_none()
                && p.arrival_time == now
                && !self.is_resident(index)
            {
                log_checks!(verbosity, "[RR] t={}: admit {}", now, p.id);
                self.enqueue(index);
            }
        }
    }

    fn execute(&mut self, now: i64, time_quantum: i64, verbosity: u8) {
        let Some(mut run) = self.running else {
            return;
        };

        let processes = self.processes;
        let id = &processes[run.index].id;
        self.remaining[run.index] -= 1;
        run.quantum_used += 1;

        if self.remaining[run.index] == 0 {
            log_changes!(verbosity, "[RR] t={}: {} completes", now, id);
            self.slices.push(Slice::new(id.clone(), run.slice_start, now));
            self.completion[run.index] = Some(now);
            self.completed += 1;
            self.running = None;
        } else if run.quantum_used == time_quantum {
            log_changes!(
                verbosity,
                "[RR] t={}: {} preempted ({} left)",
                now,
                id,
                self.remaining[run.index]
            );
            self.slices.push(Slice::new(id.clone(), run.slice_start, now));
            self.running = None;
            self.enqueue(run.index);
        } else {
            self.running = Some(run);
        }
    }

    fn dispatch(&mut self, now: i64, verbosity: u8) {
        if self.running.is_some() {
            return;
        }
        let Some(index) = self.ready.pop_front() else {
            return;
        };

        log_changes!(
            verbosity,
            "[RR] t={}: dispatch {}",
            now,
            self.processes[index].id
        );
        self.first_dispatch[index].get_or_insert(now);
        self.running = Some(Running {
            index,
            quantum_used: 0,
            slice_start: now,
        });
    }

    fn into_outcomes(self) -> (Vec<ScheduledProcess>, Vec<Slice>) {
        let outcomes = self
            .processes
            .iter()
            .zip(self.first_dispatch.iter().zip(&self.completion))
            .filter_map(|(p, (start, completion))| {
                Some(ScheduledProcess::new(p, (*start)?, (*completion)?))
            })
            .collect();
        (outcomes, self.slices)
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        check_batch(processes)?;
        if processes.is_empty() {
            return Ok(Schedule::empty(self.name()));
        }

        let mut sim = Simulation::new(processes);
        let mut current_time: i64 = 0;

        loop {
            sim.admit_arrivals(current_time, self.verbosity);
            sim.execute(current_time, self.time_quantum, self.verbosity);
            sim.dispatch(current_time, self.verbosity);
            log_debug!(
                self.verbosity,
                "[RR] t={}: running={:?} ready={:?} completed={}",
                current_time,
                sim.running.map(|r| r.index),
                sim.ready,
                sim.completed
            );

            if sim.is_done() {
                break;
            }
            current_time += 1;
        }

        let (outcomes, slices) = sim.into_outcomes();
        Schedule::new(self.name(), outcomes, slices)
    }
}
