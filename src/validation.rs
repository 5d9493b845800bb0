//! Input validation for job sets.
//!
//! Checks structural integrity of a job collection before any policy
//! runs. Detects:
//! - Duplicate IDs
//! - Non-finite numeric fields (NaN, infinities)
//! - Negative arrival times, execution times, or weights
//!
//! Zero execution time is deliberately allowed: it produces a zero-width
//! slot and exercises the zero-makespan guard in the metrics. Any finite
//! deadline is allowed; an unmeetable deadline is scheduled anyway and
//! surfaces in the metrics rather than as an input error.

use std::collections::HashSet;

use crate::models::Job;

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
    /// Two jobs share the same ID.
    DuplicateId,
    /// A numeric field is NaN or infinite.
    NonFiniteField,
    /// A job arrives before t=0.
    NegativeArrivalTime,
    /// A job requires negative CPU time.
    NegativeExecutionTime,
    /// A job has a negative weight.
    NegativeWeight,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a job collection.
///
/// Collects all detected issues rather than stopping at the first.
/// The empty-collection check lives at the driver boundary, not here.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for job in jobs {
        if !seen_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        for (field, value) in [
            ("arrivalTime", job.arrival_time),
            ("executionTime", job.execution_time),
            ("deadline", job.deadline),
            ("weight", job.weight),
        ] {
            if !value.is_finite() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteField,
                    format!("Job '{}': {field} is not finite", job.id),
                ));
            }
        }

        if job.arrival_time.is_finite() && job.arrival_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                format!("Job '{}': negative arrival time {}", job.id, job.arrival_time),
            ));
        }
        if job.execution_time.is_finite() && job.execution_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeExecutionTime,
                format!(
                    "Job '{}': negative execution time {}",
                    job.id, job.execution_time
                ),
            ));
        }
        if job.weight.is_finite() && job.weight < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeWeight,
                format!("Job '{}': negative weight {}", job.id, job.weight),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
