//! Input validation for simulation runs.
//!
//! The scheduler trusts its input. Everything it relies on is checked
//! here first:
//! - Process count within `[1, max_processes]`
//! - Non-negative arrival times
//! - Positive burst times
//!
//! Per-field checks are exposed separately so an interactive front end
//! can reject a value as soon as it is entered.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config::SimulationConfig;
use crate::models::{ProcessId, ProcessSpec, Tick};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Process count outside `[1, max_processes]`.
    InvalidProcessCount,
    /// Negative arrival time.
    InvalidArrival,
    /// Zero or negative burst time.
    InvalidBurst,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks a process count against the configured maximum.
pub fn validate_count(count: i64, config: &SimulationConfig) -> Result<(), ValidationError> {
    let max = i64::try_from(config.max_processes).unwrap_or(i64::MAX);
    if (1..=max).contains(&count) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidProcessCount,
            format!("number of processes must be between 1 and {max} (got {count})"),
        ))
    }
}

/// Checks the arrival time of process `id`.
pub fn validate_arrival(id: ProcessId, arrival: Tick) -> Result<(), ValidationError> {
    if arrival >= 0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidArrival,
            format!("P{id}: arrival time cannot be negative (got {arrival})"),
        ))
    }
}

/// Checks the burst time of process `id`.
pub fn validate_burst(id: ProcessId, burst: Tick) -> Result<(), ValidationError> {
    if burst > 0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidBurst,
            format!("P{id}: burst time must be positive (got {burst})"),
        ))
    }
}

/// Validates a full process list before scheduling.
///
/// Processes are numbered 1..=N in input order for error messages.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(specs: &[ProcessSpec], config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(e) = validate_count(specs.len() as i64, config) {
        errors.push(e);
    }

    for (index, spec) in specs.iter().enumerate() {
        let id = index + 1;
        if let Err(e) = validate_arrival(id, spec.arrival) {
            errors.push(e);
        }
        if let Err(e) = validate_burst(id, spec.burst) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        warn!(errors = errors.len(), "rejected simulation input");
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_specs() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(0, 5),
            ProcessSpec::new(1, 3),
            ProcessSpec::new(4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        let config = SimulationConfig::default();
        assert!(validate_input(&sample_specs(), &config).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let config = SimulationConfig::default();
        let errors = validate_input(&[], &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidProcessCount);
    }

    #[test]
    fn test_too_many_processes() {
        let config = SimulationConfig::default().with_max_processes(2);
        let errors = validate_input(&sample_specs(), &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidProcessCount));
    }

    #[test]
    fn test_count_bounds() {
        let config = SimulationConfig::default();
        assert!(validate_count(0, &config).is_err());
        assert!(validate_count(1, &config).is_ok());
        assert!(validate_count(10, &config).is_ok());
        assert!(validate_count(11, &config).is_err());
        assert!(validate_count(-3, &config).is_err());
    }

    #[test]
    fn test_count_with_unbounded_maximum() {
        let config = SimulationConfig::default().with_max_processes(usize::MAX);
        assert!(validate_count(1, &config).is_ok());
        assert!(validate_count(i64::MAX, &config).is_ok());
        assert!(validate_count(0, &config).is_err());
    }

    #[test]
    fn test_negative_arrival() {
        let config = SimulationConfig::default();
        let specs = vec![ProcessSpec::new(0, 2), ProcessSpec::new(-1, 2)];
        let errors = validate_input(&specs, &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrival);
        assert!(errors[0].message.starts_with("P2:"));
    }

    #[test]
    fn test_zero_arrival_allowed() {
        assert!(validate_arrival(1, 0).is_ok());
    }

    #[test]
    fn test_non_positive_burst() {
        assert_eq!(
            validate_burst(1, 0).unwrap_err().kind,
            ValidationErrorKind::InvalidBurst
        );
        assert!(validate_burst(1, -4).is_err());
        assert!(validate_burst(1, 1).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let config = SimulationConfig::default();
        let specs = vec![ProcessSpec::new(-1, 0), ProcessSpec::new(2, -2)];
        let errors = validate_input(&specs, &config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_error_display() {
        let err = validate_burst(4, 0).unwrap_err();
        assert_eq!(err.to_string(), "P4: burst time must be positive (got 0)");
    }
}
