//! Worry Time triage flow.
//!
//! Drives one selected worry through the decision tree and the insights
//! step. The flow owns only transient state (which worry, which question,
//! the draft insights); every durable change goes through the
//! [`WorryRepository`] passed into each call.
//!
//! ```text
//! Idle --select--> Deciding --answer(no | last)--> Reflecting --complete--> Idle
//!                     |                                |
//!                     +------------postpone------------+--> Idle
//! ```

use chrono::{DateTime, TimeZone};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, WorryId};
use crate::domain::triage::{DecisionTree, DecisionTreeError, TreeStep, WorryTimeSettings};
use crate::domain::worry::{
    DecisionQuestion, DecisionRecord, Worry, WorryCategory, WorryError, WorryStatus,
};

use super::repositories::{PersistStatus, QueueOrder, WorryRepository};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error(transparent)]
    Worry(#[from] WorryError),

    #[error("Only new or postponed worries can be triaged (this one is {0})")]
    NotSelectable(WorryStatus),

    #[error("No worry is selected")]
    NothingSelected,

    #[error("The decision questions are finished")]
    NotDeciding,

    #[error("Answer the decision questions first")]
    NotReflecting,

    #[error("Write down your insights before completing")]
    InsightsRequired,

    #[error(transparent)]
    DecisionTree(#[from] DecisionTreeError),
}

impl From<TriageError> for DomainError {
    fn from(err: TriageError) -> Self {
        let message = err.to_string();
        match err {
            TriageError::Worry(e) => e.into(),
            TriageError::NotSelectable(status) => {
                DomainError::new(ErrorCode::InvalidStateTransition, message)
                    .with_detail("status", status.as_str())
            }
            TriageError::NothingSelected => DomainError::new(ErrorCode::NothingSelected, message),
            TriageError::InsightsRequired => {
                DomainError::new(ErrorCode::EmptyField, message).with_detail("field", "insights")
            }
            TriageError::NotDeciding
            | TriageError::NotReflecting
            | TriageError::DecisionTree(_) => {
                DomainError::new(ErrorCode::InvalidStateTransition, message)
            }
        }
    }
}

/// Where the flow currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TriageState {
    #[default]
    Idle,
    Deciding {
        worry_id: WorryId,
        tree: DecisionTree,
    },
    Reflecting {
        worry_id: WorryId,
        record: DecisionRecord,
        category: WorryCategory,
        insights: String,
    },
}

/// Result of answering a decision question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Next(DecisionQuestion),
    Decided {
        category: WorryCategory,
        persist: PersistStatus,
    },
}

/// Where a postponed worry was rescheduled to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postponement {
    pub worry_id: WorryId,
    pub until: Timestamp,
    pub persist: PersistStatus,
}

#[derive(Debug, Clone, Default)]
pub struct TriageFlow {
    state: TriageState,
}

impl TriageFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TriageState {
        &self.state
    }

    /// Worry currently under triage.
    pub fn selected(&self) -> Option<WorryId> {
        match &self.state {
            TriageState::Idle => None,
            TriageState::Deciding { worry_id, .. } | TriageState::Reflecting { worry_id, .. } => {
                Some(*worry_id)
            }
        }
    }

    /// Worries that have never been triaged.
    pub fn new_queue(worries: &WorryRepository, order: QueueOrder) -> Vec<&Worry> {
        worries.queue(WorryStatus::New, order)
    }

    /// Worries sent back to a later worry time.
    pub fn postponed_queue(worries: &WorryRepository, order: QueueOrder) -> Vec<&Worry> {
        worries.queue(WorryStatus::Postponed, order)
    }

    /// Starts triage for a worry, discarding any earlier unfinished run.
    ///
    /// # Errors
    ///
    /// - `Worry(NotFound)` if the id is unknown
    /// - `NotSelectable` unless the worry is new or postponed
    pub fn select(
        &mut self,
        worries: &WorryRepository,
        id: WorryId,
    ) -> Result<DecisionQuestion, TriageError> {
        let worry = worries.get(id).ok_or_else(|| WorryError::not_found(id))?;
        if !worry.status().is_awaiting_triage() {
            return Err(TriageError::NotSelectable(worry.status()));
        }
        let tree = DecisionTree::new();
        let first = tree.current_question().unwrap_or(DecisionQuestion::ORDER[0]);
        self.state = TriageState::Deciding { worry_id: id, tree };
        tracing::debug!(worry_id = %id, "worry selected for triage");
        Ok(first)
    }

    /// Answers the current question. When the tree completes, the record is
    /// merged into the worry, which moves to in-progress.
    pub fn answer(
        &mut self,
        worries: &mut WorryRepository,
        yes: bool,
    ) -> Result<AnswerOutcome, TriageError> {
        let (worry_id, tree) = match &mut self.state {
            TriageState::Idle => return Err(TriageError::NothingSelected),
            TriageState::Reflecting { .. } => return Err(TriageError::NotDeciding),
            TriageState::Deciding { worry_id, tree } => (*worry_id, tree),
        };

        let record = match tree.answer(yes)? {
            TreeStep::Next(question) => return Ok(AnswerOutcome::Next(question)),
            TreeStep::Complete(record) => record,
        };

        let mut worry = worries
            .get(worry_id)
            .cloned()
            .ok_or_else(|| WorryError::not_found(worry_id))?;
        worry.record_decision(record)?;
        let persist = worries.update(worry)?;

        let category = WorryCategory::classify(&record);
        tracing::debug!(worry_id = %worry_id, %category, "triage decided");
        self.state = TriageState::Reflecting {
            worry_id,
            record,
            category,
            insights: String::new(),
        };
        Ok(AnswerOutcome::Decided { category, persist })
    }

    /// Replaces the draft insights.
    pub fn set_insights(&mut self, text: impl Into<String>) -> Result<(), TriageError> {
        match &mut self.state {
            TriageState::Reflecting { insights, .. } => {
                *insights = text.into();
                Ok(())
            }
            TriageState::Idle => Err(TriageError::NothingSelected),
            TriageState::Deciding { .. } => Err(TriageError::NotReflecting),
        }
    }

    /// Sends the selected worry to the next worry time after `now`.
    pub fn postpone<Tz: TimeZone>(
        &mut self,
        worries: &mut WorryRepository,
        settings: &WorryTimeSettings,
        now: &DateTime<Tz>,
    ) -> Result<Postponement, TriageError> {
        let worry_id = self.selected().ok_or(TriageError::NothingSelected)?;
        if let TriageState::Deciding { tree, .. } = &mut self.state {
            tree.postpone()?;
        }

        let until = Timestamp::from_zoned(&settings.next_occurrence(now));
        let mut worry = worries
            .get(worry_id)
            .cloned()
            .ok_or_else(|| WorryError::not_found(worry_id))?;
        worry.postpone(until)?;
        let persist = worries.update(worry)?;

        self.state = TriageState::Idle;
        tracing::info!(worry_id = %worry_id, until = %until.to_rfc3339(), "worry postponed");
        Ok(Postponement {
            worry_id,
            until,
            persist,
        })
    }

    /// Finalizes the reflection with the draft insights.
    ///
    /// # Errors
    ///
    /// - `NotReflecting` before the decision questions are done
    /// - `InsightsRequired` if the draft is blank
    pub fn complete(&mut self, worries: &mut WorryRepository) -> Result<PersistStatus, TriageError> {
        let (worry_id, insights) = match &self.state {
            TriageState::Reflecting {
                worry_id, insights, ..
            } => (*worry_id, insights.trim().to_string()),
            TriageState::Idle => return Err(TriageError::NothingSelected),
            TriageState::Deciding { .. } => return Err(TriageError::NotReflecting),
        };
        if insights.is_empty() {
            return Err(TriageError::InsightsRequired);
        }

        let mut worry = worries
            .get(worry_id)
            .cloned()
            .ok_or_else(|| WorryError::not_found(worry_id))?;
        worry.complete(&insights)?;
        let persist = worries.update(worry)?;

        self.state = TriageState::Idle;
        tracing::info!(worry_id = %worry_id, "worry reflection completed");
        Ok(persist)
    }

    /// Deselects without changing anything. A worry already moved to
    /// in-progress stays there.
    pub fn cancel(&mut self) {
        if let Some(id) = self.selected() {
            tracing::debug!(worry_id = %id, "triage cancelled");
        }
        self.state = TriageState::Idle;
    }
}
