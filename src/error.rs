//! Error type shared by all schedulers.

use thiserror::Error;

use crate::validation::ValidationError;

/// Reasons a scheduler run can be refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Averages are undefined over zero processes.
    #[error("cannot schedule an empty batch")]
    EmptyBatch,
    /// Round Robin needs a quantum of at least one tick.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),
    /// The batch failed input validation.
    #[error("invalid process batch: {}", join_messages(.0))]
    InvalidBatch(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
