//! Input validation for process sets.
//!
//! Checks field constraints before any discipline runs:
//! - Non-positive burst durations
//! - Negative arrival times
//! - Duplicate process IDs
//! - Sets whose last arrival plus total burst does not fit in a tick counter
//!
//! All issues are collected; [`ensure_valid`] reports the first one as a
//! `MalformedInput` error.

use std::collections::HashSet;

use crate::error::{Result, SimulationError};
use crate::models::{last_arrival, Process};

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

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
    /// Burst duration is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
    /// The simulation clock could pass `Ticks::MAX`.
    ClockOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for SimulationError {
    fn from(err: ValidationError) -> Self {
        SimulationError::malformed(err.message)
    }
}

/// Validates a process set.
///
/// Checks, per process in input order:
/// 1. `burst_duration > 0`
/// 2. `arrival_time >= 0`
/// 3. ID not seen earlier in the set
///
/// Then checks that `last arrival + sum(burst)` fits in `Ticks`, which bounds
/// every clock value a discipline can reach.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst duration {}",
                    p.id, p.burst_duration
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    let horizon = processes
        .iter()
        .try_fold(last_arrival(processes), |acc, p| {
            acc.checked_add(p.burst_duration.max(0))
        });
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ClockOverflow,
            "Last arrival plus total burst overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process set and rejects empty input.
///
/// Fails with `EmptyProcessSet` for zero processes and `MalformedInput`
/// for the first field violation.
pub fn ensure_valid(processes: &[Process]) -> Result<()> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }
    match validate_processes(processes) {
        Ok(()) => Ok(()),
        Err(errors) => match errors.into_iter().next() {
            Some(first) => Err(first.into()),
            None => Ok(()),
        },
    }
}
