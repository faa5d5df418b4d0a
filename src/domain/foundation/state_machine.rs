//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state transitions
//! across entity lifecycle statuses (worry status, problem-solution status).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors list their legal edges once in `valid_transitions` and get
/// validated transitions and terminal detection for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WorryStatus {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             New => vec![InProgress, Postponed],
///             InProgress => vec![Postponed, Completed],
///             // ... etc
///         }
///     }
/// }
///
/// let next = WorryStatus::New.transition_to(WorryStatus::InProgress)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        On,
        Broken,
    }

    impl StateMachine for Light {
        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Light::Off => vec![Light::On, Light::Broken],
                Light::On => vec![Light::Off, Light::Broken],
                Light::Broken => vec![],
            }
        }
    }

    #[test]
    fn transition_to_follows_listed_edges() {
        assert_eq!(Light::Off.transition_to(Light::On), Ok(Light::On));
        assert_eq!(Light::On.transition_to(Light::Broken), Ok(Light::Broken));
    }

    #[test]
    fn transition_to_rejects_unlisted_edges() {
        let err = Light::Broken.transition_to(Light::On).unwrap_err();
        assert!(err.to_string().contains("Cannot transition from Broken to On"));
    }

    #[test]
    fn self_loops_need_to_be_listed() {
        assert!(!Light::On.can_transition_to(&Light::On));
    }

    #[test]
    fn terminal_means_no_outgoing_edges() {
        assert!(Light::Broken.is_terminal());
        assert!(!Light::Off.is_terminal());
    }
}
