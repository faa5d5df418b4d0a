//! Worry aggregate and its progressively filled reflection.
//!
//! A worry is logged with nothing but its text. Worry time later attaches a
//! decision record, a postponement target, or closing insights. Every change
//! to the nested reflection goes through a typed setter so sibling fields
//! are never lost.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, Timestamp, WorryId};

use super::{DecisionRecord, WorryCategory, WorryError, WorryStatus};

/// Reflection gathered about a worry during worry time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decision_tree: Option<DecisionRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    insights: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    postponed_until: Option<Timestamp>,
}

impl Reflection {
    pub fn decision_tree(&self) -> Option<&DecisionRecord> {
        self.decision_tree.as_ref()
    }

    pub fn insights(&self) -> Option<&str> {
        self.insights.as_deref()
    }

    pub fn postponed_until(&self) -> Option<&Timestamp> {
        self.postponed_until.as_ref()
    }

    /// Replaces the decision record, keeping insights and postponement.
    pub fn with_decision(mut self, record: DecisionRecord) -> Self {
        self.decision_tree = Some(record);
        self
    }

    /// Replaces the insights, keeping the decision record and postponement.
    pub fn with_insights(mut self, insights: impl Into<String>) -> Self {
        self.insights = Some(insights.into());
        self
    }

    /// Replaces the postponement target, keeping everything else.
    pub fn with_postponed_until(mut self, until: Timestamp) -> Self {
        self.postponed_until = Some(until);
        self
    }

    /// Drops any insights, keeping everything else.
    pub fn clear_insights(mut self) -> Self {
        self.insights = None;
        self
    }
}

/// A user-logged concern awaiting or having undergone triage.
///
/// # Invariants
///
/// - `content` is trimmed and non-empty
/// - `status == Postponed` implies `reflection.postponed_until` is set
/// - completion through [`Worry::complete`] sets `is_dealt_with`, the
///   `Completed` status and non-empty insights together
/// - `Completed` is never left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worry {
    id: WorryId,
    content: String,
    created_at: Timestamp,
    status: WorryStatus,
    is_dealt_with: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reflection: Option<Reflection>,
}

impl Worry {
    /// Logs a new worry.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if the text is blank after trimming
    pub fn new(content: impl AsRef<str>) -> Result<Self, WorryError> {
        Self::logged_at(content, Timestamp::now())
    }

    /// Logs a new worry with an explicit creation time.
    pub fn logged_at(content: impl AsRef<str>, created_at: Timestamp) -> Result<Self, WorryError> {
        let content = content.as_ref().trim();
        if content.is_empty() {
            return Err(WorryError::EmptyContent);
        }
        Ok(Self {
            id: WorryId::new(),
            content: content.to_string(),
            created_at,
            status: WorryStatus::New,
            is_dealt_with: false,
            reflection: None,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> WorryId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn status(&self) -> WorryStatus {
        self.status
    }

    pub fn is_dealt_with(&self) -> bool {
        self.is_dealt_with
    }

    pub fn reflection(&self) -> Option<&Reflection> {
        self.reflection.as_ref()
    }

    pub fn decision(&self) -> Option<&DecisionRecord> {
        self.reflection.as_ref().and_then(Reflection::decision_tree)
    }

    pub fn insights(&self) -> Option<&str> {
        self.reflection.as_ref().and_then(Reflection::insights)
    }

    pub fn postponed_until(&self) -> Option<&Timestamp> {
        self.reflection.as_ref().and_then(Reflection::postponed_until)
    }

    /// Derived category, available once a decision has been recorded.
    pub fn category(&self) -> Option<WorryCategory> {
        self.decision().map(WorryCategory::classify)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Stores the decision tree outcome and moves the worry into progress.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the worry is new or postponed
    pub fn record_decision(&mut self, record: DecisionRecord) -> Result<(), WorryError> {
        self.move_to(WorryStatus::InProgress)?;
        self.merge_reflection(|r| r.with_decision(record));
        Ok(())
    }

    /// Defers the worry to the given worry time, discarding any insights.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the worry is already completed
    pub fn postpone(&mut self, until: Timestamp) -> Result<(), WorryError> {
        self.move_to(WorryStatus::Postponed)?;
        self.merge_reflection(|r| r.with_postponed_until(until).clear_insights());
        Ok(())
    }

    /// Finalizes the reflection.
    ///
    /// # Errors
    ///
    /// - `EmptyInsights` if the insights are blank
    /// - `InvalidTransition` unless the worry is in progress
    pub fn complete(&mut self, insights: impl AsRef<str>) -> Result<(), WorryError> {
        let insights = insights.as_ref().trim();
        if insights.is_empty() {
            return Err(WorryError::EmptyInsights);
        }
        self.move_to(WorryStatus::Completed)?;
        self.merge_reflection(|r| r.with_insights(insights));
        self.is_dealt_with = true;
        Ok(())
    }

    /// Flips the dealt-with flag. Status is left alone.
    pub fn toggle_dealt_with(&mut self) {
        self.is_dealt_with = !self.is_dealt_with;
    }

    fn move_to(&mut self, target: WorryStatus) -> Result<(), WorryError> {
        let from = self.status;
        self.status = from
            .transition_to(target)
            .map_err(|_| WorryError::invalid_transition(from, target))?;
        Ok(())
    }

    fn merge_reflection(&mut self, f: impl FnOnce(Reflection) -> Reflection) {
        let current = self.reflection.take().unwrap_or_default();
        self.reflection = Some(f(current));
    }
}
