//! Problem-solving wizard errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SolutionId};

use super::WizardStep;

/// Reasons a wizard operation was refused. None of them change the draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Step '{}' is not complete yet", .0.title())]
    StepIncomplete(WizardStep),

    #[error("Item text cannot be empty")]
    EmptyItem,

    #[error("Solution '{0}' is already listed")]
    DuplicateSolution(String),

    #[error("No solution named '{0}'")]
    UnknownSolution(String),

    #[error("No item at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::StepIncomplete(_) => ErrorCode::StepIncomplete,
            WizardError::EmptyItem => ErrorCode::EmptyField,
            WizardError::DuplicateSolution(_) => ErrorCode::ValidationFailed,
            WizardError::UnknownSolution(_) | WizardError::IndexOutOfRange { .. } => {
                ErrorCode::OutOfRange
            }
        }
    }
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            WizardError::StepIncomplete(step) => domain.with_detail("step", step.title()),
            _ => domain,
        }
    }
}

/// A stored problem-solving record was looked up by an unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Problem solution not found: {0}")]
pub struct SolutionNotFound(pub SolutionId);

impl From<SolutionNotFound> for DomainError {
    fn from(err: SolutionNotFound) -> Self {
        DomainError::new(ErrorCode::SolutionNotFound, err.to_string())
            .with_detail("solution_id", err.0.to_string())
    }
}
