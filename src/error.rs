//! Errors that end a simulation run.

use thiserror::Error;

use crate::models::{ProcessId, Tick};
use crate::validation::ValidationError;

/// Terminal failure of a single simulation run.
///
/// Neither variant is retried by the library; the caller decides whether
/// to prompt again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Input rejected before scheduling started.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Simulated time reached the ceiling with unfinished processes.
    #[error("simulation overran the {ceiling}-unit ceiling; unfinished: {}", join_ids(.incomplete))]
    Overrun {
        ceiling: Tick,
        incomplete: Vec<ProcessId>,
    },
}

impl SimulationError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::Overrun { .. } => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_ids(ids: &[ProcessId]) -> String {
    ids.iter()
        .map(|id| format!("P{id}"))
        .collect::<Vec<_>>()
        .join(", ")
}
