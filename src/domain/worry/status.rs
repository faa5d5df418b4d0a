//! WorryStatus enum for tracking where a worry is in the triage lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a worry.
///
/// `Completed` is terminal; nothing ever moves a worry back out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WorryStatus {
    #[default]
    New,
    Postponed,
    InProgress,
    Completed,
}

impl WorryStatus {
    /// Returns true if the worry sits in one of the worry-time queues.
    pub fn is_awaiting_triage(&self) -> bool {
        matches!(self, WorryStatus::New | WorryStatus::Postponed)
    }

    /// Returns true once the worry has been worked through.
    pub fn is_completed(&self) -> bool {
        matches!(self, WorryStatus::Completed)
    }

    /// Wire name, as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorryStatus::New => "new",
            WorryStatus::Postponed => "postponed",
            WorryStatus::InProgress => "in-progress",
            WorryStatus::Completed => "completed",
        }
    }
}

impl StateMachine for WorryStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use WorryStatus::*;
        match self {
            New => vec![InProgress, Postponed],
            // Postpone can be pressed again while re-triaging a postponed worry.
            Postponed => vec![InProgress, Postponed],
            InProgress => vec![Postponed, Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for WorryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorryStatus::New => "New",
            WorryStatus::Postponed => "Postponed",
            WorryStatus::InProgress => "In Progress",
            WorryStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WorryStatus; 4] = [
        WorryStatus::New,
        WorryStatus::Postponed,
        WorryStatus::InProgress,
        WorryStatus::Completed,
    ];

    #[test]
    fn default_is_new() {
        assert_eq!(WorryStatus::default(), WorryStatus::New);
    }

    #[test]
    fn new_can_be_triaged_or_postponed() {
        assert!(WorryStatus::New.can_transition_to(&WorryStatus::InProgress));
        assert!(WorryStatus::New.can_transition_to(&WorryStatus::Postponed));
        assert!(!WorryStatus::New.can_transition_to(&WorryStatus::Completed));
    }

    #[test]
    fn postponed_reenters_triage() {
        assert!(WorryStatus::Postponed.can_transition_to(&WorryStatus::InProgress));
        assert!(WorryStatus::Postponed.can_transition_to(&WorryStatus::Postponed));
    }

    #[test]
    fn in_progress_finishes_or_postpones() {
        assert!(WorryStatus::InProgress.can_transition_to(&WorryStatus::Completed));
        assert!(WorryStatus::InProgress.can_transition_to(&WorryStatus::Postponed));
        assert!(!WorryStatus::InProgress.can_transition_to(&WorryStatus::New));
    }

    #[test]
    fn completed_never_reverts() {
        assert!(WorryStatus::Completed.is_terminal());
        for target in ALL {
            assert!(!WorryStatus::Completed.can_transition_to(&target));
        }
    }

    #[test]
    fn nothing_returns_to_new() {
        for from in ALL {
            assert!(!from.can_transition_to(&WorryStatus::New));
        }
    }

    #[test]
    fn serializes_kebab_case() {
        let json = serde_json::to_string(&WorryStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: WorryStatus = serde_json::from_str("\"postponed\"").unwrap();
        assert_eq!(parsed, WorryStatus::Postponed);
    }

    #[test]
    fn as_str_matches_serde() {
        for status in ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
