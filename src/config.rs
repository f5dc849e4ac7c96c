//! Simulation configuration.
//!
//! Selects the discipline, the Round Robin quantum and the log level.
//! Missing fields fall back to [`SimulationConfig::default`] when
//! deserialized, so a loader can accept partial documents.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::logging::VERBOSITY_SILENT;
use crate::scheduler::{CpuScheduler, Fcfs, RoundRobin, Sjf};

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed quantum.
    #[default]
    RoundRobin,
}

impl Algorithm {
    /// Short display name, matching [`CpuScheduler::name`].
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "RR",
        }
    }
}

/// Configuration for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Discipline to run.
    pub algorithm: Algorithm,
    /// Round Robin quantum in ticks. Ignored by FCFS and SJF.
    pub time_quantum: i64,
    /// Log level (see [`crate::logging`]).
    pub verbosity: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::RoundRobin,
            time_quantum: 2,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl SimulationConfig {
    /// Creates a default config running `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Sets the log level.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Builds the configured scheduler.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidQuantum`] for Round Robin with a
    /// non-positive quantum.
    pub fn build(&self) -> Result<Box<dyn CpuScheduler>, ScheduleError> {
        let scheduler: Box<dyn CpuScheduler> = match self.algorithm {
            Algorithm::Fcfs => Box::new(Fcfs::new().with_verbosity(self.verbosity)),
            Algorithm::Sjf => Box::new(Sjf::new().with_verbosity(self.verbosity)),
            Algorithm::RoundRobin => Box::new(
                RoundRobin::new(self.time_quantum)?.with_verbosity(self.verbosity),
            ),
        };
        Ok(scheduler)
    }
}
