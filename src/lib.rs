//! CPU scheduling simulator.
//!
//! Simulates a batch of processes on a single CPU under three classical
//! disciplines and reports average turnaround, waiting and response time.
//! Simulation runs in virtual ticks and is fully deterministic.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ScheduledProcess`, `Slice`, `Schedule`
//! - **`scheduler`**: `Fcfs`, `Sjf`, `RoundRobin`, `Metrics`, `compare`
//! - **`validation`**: Input integrity checks (duplicate IDs, bad times)
//! - **`config`**: Algorithm selection and scheduler construction
//! - **`workload`**: Seeded random batches
//! - **`logging`**: Verbosity-gated stderr logging macros
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{fcfs_metrics, rr_metrics, sjf_metrics};
//!
//! let batch = vec![Process::new("P0", 0, 5), Process::new("P1", 1, 3)];
//!
//! let fcfs = fcfs_metrics(&batch).unwrap();
//! assert!((fcfs.avg_waiting - 2.0).abs() < 1e-10);
//! assert!(sjf_metrics(&batch).is_ok());
//! assert!(rr_metrics(&batch, 2).is_ok());
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod logging;

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
