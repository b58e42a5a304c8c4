//! Input validation for process lists.
//!
//! Checks the static fields of every process before scheduling. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Time horizons that do not fit in `i64`

use crate::models::Process;
use std::collections::HashSet;

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
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or a negative amount).
    NonPositiveBurst,
    /// `max(arrival) + sum(burst)` overflows `i64`.
    TimeOverflow,
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

/// Validates a process list.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in processes {
        if !seen.insert(p.process_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.process_id),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.process_id, p.arrival_time
                ),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.process_id, p.burst_time
                ),
            ));
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every completion time any scheduler can produce:
/// the clock only ever jumps forward to an arrival, and otherwise advances
/// by CPU time actually used.
///
/// `None` if the bound overflows. Invalid arrivals and bursts are ignored,
/// they are reported separately.
fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time)
        .filter(|&a| a >= 0)
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .map(|p| p.burst_time)
        .filter(|&b| b > 0)
        .try_fold(latest_arrival, |acc, b| acc.checked_add(b))
}
