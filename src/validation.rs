//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process set and the chosen
//! discipline before any segment is produced. Detects:
//! - Blank or duplicate pids
//! - Non-positive burst times
//! - Negative arrival times
//! - Round Robin runs with a non-positive quantum
//! - An empty process set
//!
//! Validation is fail-fast for the engine: a run never starts with a
//! non-empty error list. It is also the guard behind the termination
//! argument — once inputs pass, every simulation loop strictly reduces
//! remaining work or jumps forward to a finite arrival.

use std::collections::HashSet;

use crate::disciplines::Discipline;
use crate::models::Process;

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
    /// A pid is empty or whitespace-only.
    BlankPid,
    /// Two processes share the same pid.
    DuplicatePid,
    /// A burst time is below one unit.
    NonPositiveBurst,
    /// An arrival time precedes t=0.
    NegativeArrival,
    /// Round Robin was selected with a quantum below one unit.
    InvalidQuantum,
    /// The process set is empty.
    NothingToSchedule,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set against a chosen discipline.
///
/// Checks:
/// 1. The process set is non-empty
/// 2. No pid is blank
/// 3. No pid is duplicated
/// 4. Every burst time is at least one unit
/// 5. No arrival time is negative
/// 6. A Round Robin quantum is at least one unit
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], discipline: &Discipline) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NothingToSchedule,
            "Process set is empty: nothing to schedule",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if p.pid.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankPid,
                "Process has a blank pid",
            ));
        } else if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.pid, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.pid, p.arrival_time),
            ));
        }
    }

    if let Discipline::RoundRobin { quantum } = discipline {
        if *quantum < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round Robin quantum must be at least 1, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
