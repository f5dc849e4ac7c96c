//! Input validation for process batches.
//!
//! Checks structural integrity of a batch before scheduling. Detects:
//! - Empty or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//!
//! A batch that fails any check would either never finish (zero burst
//! under Round Robin) or never be admitted (negative arrival), so every
//! scheduler runs these checks first.

use crate::models::Process;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process batch.
///
/// Checks:
/// 1. Every process has a non-empty ID
/// 2. No duplicate process IDs
/// 3. All arrival times are `>= 0`
/// 4. All burst times are `> 0`
///
/// Duplicate arrival times are accepted; each discipline breaks those
/// ties by input order.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at index {index} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 1, 8), // Same arrival as P2 is fine
        ]
    }

    #[test]
    fn test_valid_batch() {
        assert!(validate_batch(&sample_batch()).is_ok());
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert!(validate_batch(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let batch = vec![Process::new("P1", 0, 5), Process::new("P1", 2, 3)];

        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_empty_id() {
        let batch = vec![Process::new("", 0, 5)];

        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);
    }

    #[test]
    fn test_negative_arrival() {
        let batch = vec![Process::new("P1", -1, 5)];

        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_zero_burst() {
        let batch = vec![Process::new("P1", 0, 0)];

        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_multiple_errors() {
        // Negative arrival + negative burst + duplicate
        let batch = vec![
            Process::new("P1", -3, -2),
            Process::new("P1", 0, 4),
        ];

        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
