//! Process (job) model.
//!
//! A process is a unit of CPU work submitted to a scheduler. It carries
//! only what the disciplines need: when it becomes ready and how much
//! CPU time it requires.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process enters the ready queue.
    pub arrival_time: i64,
    /// Total CPU ticks required to finish.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }
}

/// Scheduling outcome for one process.
///
/// Produced by a scheduler; the input [`Process`] is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// Process identifier.
    pub id: String,
    /// Arrival tick (copied from the input).
    pub arrival_time: i64,
    /// Burst length (copied from the input).
    pub burst_time: i64,
    /// Tick of the first CPU dispatch.
    pub start_time: i64,
    /// Tick at which the last unit of burst was consumed.
    pub completion_time: i64,
}

impl ScheduledProcess {
    /// Creates a result for `process` with the given start and completion.
    pub fn new(process: &Process, start_time: i64, completion_time: i64) -> Self {
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
        }
    }

    /// Completion minus arrival.
    #[inline]
    pub fn turnaround(&self) -> i64 {
        self.completion_time - self.arrival_time
    }

    /// Time spent ready but not running.
    #[inline]
    pub fn waiting(&self) -> i64 {
        self.turnaround() - self.burst_time
    }

    /// First dispatch minus arrival.
    #[inline]
    pub fn response(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}
