//! Decision Tree Engine - the four-question classifier run during worry time.
//!
//! Questions are asked in [`DecisionQuestion::ORDER`]. A "no" to any of them
//! makes the remaining questions moot, so the tree stops there and emits
//! the record with the unanswered keys left at their seeded `false`.
//!
//! The engine never persists anything; it only hands the finished record
//! back to its caller.

use serde::Serialize;
use thiserror::Error;

use crate::domain::worry::{DecisionQuestion, DecisionRecord};

/// Where the tree currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum TreeState {
    /// Waiting for an answer to this question.
    Asking(DecisionQuestion),
    /// Terminated with a full record.
    Complete(DecisionRecord),
    /// Abandoned through postpone; no record emitted.
    Postponed,
}

/// Result of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStep {
    Next(DecisionQuestion),
    Complete(DecisionRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionTreeError {
    #[error("Decision tree has already finished")]
    Finished,
}

/// A single run of the decision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    state: TreeState,
    answers: DecisionRecord,
    history: Vec<(DecisionQuestion, bool)>,
}

impl DecisionTree {
    /// Starts at the first question with an all-false accumulator.
    pub fn new() -> Self {
        Self {
            state: TreeState::Asking(DecisionQuestion::ORDER[0]),
            answers: DecisionRecord::default(),
            history: Vec::with_capacity(DecisionQuestion::ORDER.len()),
        }
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    /// The question awaiting an answer, if the tree is still running.
    pub fn current_question(&self) -> Option<DecisionQuestion> {
        match self.state {
            TreeState::Asking(q) => Some(q),
            _ => None,
        }
    }

    /// Answers so far, with unvisited keys still `false`.
    pub fn answers(&self) -> &DecisionRecord {
        &self.answers
    }

    /// Questions answered, in the order they were asked.
    pub fn history(&self) -> &[(DecisionQuestion, bool)] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, TreeState::Asking(_))
    }

    /// Records an answer for the current question.
    ///
    /// # Errors
    ///
    /// - `Finished` once the tree has completed or been postponed
    pub fn answer(&mut self, answer: bool) -> Result<TreeStep, DecisionTreeError> {
        let question = self.current_question().ok_or(DecisionTreeError::Finished)?;

        self.answers.set(question, answer);
        self.history.push((question, answer));

        let step = match question.next() {
            Some(next) if answer => {
                self.state = TreeState::Asking(next);
                TreeStep::Next(next)
            }
            _ => {
                self.state = TreeState::Complete(self.answers);
                TreeStep::Complete(self.answers)
            }
        };
        tracing::debug!(question = question.key(), answer, ?step, "decision tree answered");
        Ok(step)
    }

    /// Leaves the tree without emitting a record.
    ///
    /// # Errors
    ///
    /// - `Finished` once the tree has completed or been postponed
    pub fn postpone(&mut self) -> Result<(), DecisionTreeError> {
        if self.is_finished() {
            return Err(DecisionTreeError::Finished);
        }
        self.state = TreeState::Postponed;
        Ok(())
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_first_question() {
        let tree = DecisionTree::new();
        assert_eq!(tree.current_question(), Some(DecisionQuestion::IsHappeningNow));
        assert_eq!(tree.answers(), &DecisionRecord::default());
        assert!(!tree.is_finished());
    }

    #[test]
    fn all_yes_visits_every_question() {
        let mut tree = DecisionTree::new();
        let mut visited = vec![tree.current_question().unwrap()];

        for _ in 0..3 {
            match tree.answer(true).unwrap() {
                TreeStep::Next(q) => visited.push(q),
                TreeStep::Complete(_) => panic!("finished early"),
            }
        }
        let step = tree.answer(true).unwrap();

        assert_eq!(visited, DecisionQuestion::ORDER.to_vec());
        assert_eq!(step, TreeStep::Complete(DecisionRecord::new(true, true, true, true)));
        assert_eq!(tree.history().len(), 4);
    }

    #[test]
    fn no_on_first_question_stops_immediately() {
        let mut tree = DecisionTree::new();
        let step = tree.answer(false).unwrap();

        assert_eq!(step, TreeStep::Complete(DecisionRecord::default()));
        assert_eq!(tree.state(), TreeState::Complete(DecisionRecord::default()));
        assert_eq!(tree.history(), &[(DecisionQuestion::IsHappeningNow, false)]);
    }

    #[test]
    fn no_on_third_question_keeps_earlier_yes() {
        let mut tree = DecisionTree::new();
        tree.answer(true).unwrap();
        tree.answer(true).unwrap();
        let step = tree.answer(false).unwrap();

        assert_eq!(
            step,
            TreeStep::Complete(DecisionRecord::new(true, true, false, false))
        );
    }

    #[test]
    fn answering_after_completion_fails() {
        let mut tree = DecisionTree::new();
        tree.answer(false).unwrap();
        assert_eq!(tree.answer(true), Err(DecisionTreeError::Finished));
    }

    #[test]
    fn postpone_ends_without_record() {
        let mut tree = DecisionTree::new();
        tree.answer(true).unwrap();
        tree.postpone().unwrap();

        assert_eq!(tree.state(), TreeState::Postponed);
        assert!(tree.is_finished());
        assert_eq!(tree.answer(true), Err(DecisionTreeError::Finished));
        assert_eq!(tree.postpone(), Err(DecisionTreeError::Finished));
    }

    proptest! {
        #[test]
        fn first_no_terminates_with_defaults_after_it(
            answers in proptest::collection::vec(any::<bool>(), 4)
        ) {
            let mut tree = DecisionTree::new();
            let mut emitted = None;
            let mut asked = 0;
            for answer in &answers {
                asked += 1;
                if let TreeStep::Complete(record) = tree.answer(*answer).unwrap() {
                    emitted = Some(record);
                    break;
                }
            }
            let record = emitted.expect("tree always terminates within four answers");

            match answers.iter().position(|a| !a) {
                Some(first_no) => {
                    prop_assert_eq!(asked, first_no + 1);
                    for (i, q) in DecisionQuestion::ORDER.iter().enumerate() {
                        prop_assert_eq!(record.get(*q), i < first_no);
                    }
                }
                None => {
                    prop_assert_eq!(asked, 4);
                    prop_assert!(record.all_yes());
                }
            }
        }
    }
}
