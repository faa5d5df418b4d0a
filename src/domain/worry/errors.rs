//! Worry-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, WorryId};

use super::WorryStatus;

/// Worry-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorryError {
    /// No worry with this id exists.
    NotFound(WorryId),
    /// Worry text was blank.
    EmptyContent,
    /// Completion requires non-blank insights.
    EmptyInsights,
    /// The status machine does not allow this move.
    InvalidTransition { from: WorryStatus, to: WorryStatus },
}

impl WorryError {
    pub fn not_found(id: WorryId) -> Self {
        WorryError::NotFound(id)
    }

    pub fn invalid_transition(from: WorryStatus, to: WorryStatus) -> Self {
        WorryError::InvalidTransition { from, to }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorryError::NotFound(_) => ErrorCode::WorryNotFound,
            WorryError::EmptyContent | WorryError::EmptyInsights => ErrorCode::EmptyField,
            WorryError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
        }
    }

    pub fn message(&self) -> String {
        match self {
            WorryError::NotFound(id) => format!("Worry not found: {}", id),
            WorryError::EmptyContent => "Worry content cannot be empty".to_string(),
            WorryError::EmptyInsights => "Insights are required to complete a worry".to_string(),
            WorryError::InvalidTransition { from, to } => {
                format!("Cannot move worry from {} to {}", from, to)
            }
        }
    }
}

impl std::fmt::Display for WorryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WorryError {}

impl From<WorryError> for DomainError {
    fn from(err: WorryError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            WorryError::NotFound(id) => domain.with_detail("worry_id", id.to_string()),
            WorryError::EmptyContent => domain.with_detail("field", "content"),
            WorryError::EmptyInsights => domain.with_detail("field", "insights"),
            WorryError::InvalidTransition { .. } => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_not_found_code() {
        let err = WorryError::not_found(WorryId::new());
        assert_eq!(err.code(), ErrorCode::WorryNotFound);
        assert!(err.to_string().starts_with("Worry not found"));
    }

    #[test]
    fn transition_message_names_both_states() {
        let err = WorryError::invalid_transition(WorryStatus::Completed, WorryStatus::InProgress);
        assert_eq!(err.to_string(), "Cannot move worry from Completed to In Progress");
    }

    #[test]
    fn converts_to_domain_error_with_detail() {
        let err: DomainError = WorryError::EmptyContent.into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field"), Some(&"content".to_string()));
    }
}
