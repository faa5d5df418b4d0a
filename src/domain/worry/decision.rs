//! The four triage questions and the record of their answers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four yes/no questions asked during worry time, in the order
/// they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecisionQuestion {
    IsHappeningNow,
    ConcernsMe,
    CanTakeAction,
    GoodUseOfResources,
}

impl DecisionQuestion {
    /// The canonical asking order.
    pub const ORDER: [DecisionQuestion; 4] = [
        DecisionQuestion::IsHappeningNow,
        DecisionQuestion::ConcernsMe,
        DecisionQuestion::CanTakeAction,
        DecisionQuestion::GoodUseOfResources,
    ];

    /// Returns the 0-based position of this question.
    pub fn index(&self) -> usize {
        match self {
            DecisionQuestion::IsHappeningNow => 0,
            DecisionQuestion::ConcernsMe => 1,
            DecisionQuestion::CanTakeAction => 2,
            DecisionQuestion::GoodUseOfResources => 3,
        }
    }

    /// Returns the question at `index`, if any.
    pub fn at(index: usize) -> Option<DecisionQuestion> {
        Self::ORDER.get(index).copied()
    }

    /// Returns the following question, or None after the last one.
    pub fn next(&self) -> Option<DecisionQuestion> {
        Self::at(self.index() + 1)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Field name in the persisted decision record.
    pub fn key(&self) -> &'static str {
        match self {
            DecisionQuestion::IsHappeningNow => "isHappeningNow",
            DecisionQuestion::ConcernsMe => "concernsMe",
            DecisionQuestion::CanTakeAction => "canTakeAction",
            DecisionQuestion::GoodUseOfResources => "goodUseOfResources",
        }
    }

    /// The question as shown to the user.
    pub fn prompt(&self) -> &'static str {
        match self {
            DecisionQuestion::IsHappeningNow => "Is this thing happening now?",
            DecisionQuestion::ConcernsMe => "Does this worry concern me?",
            DecisionQuestion::CanTakeAction => {
                "Can I take action that will directly resolve it?"
            }
            DecisionQuestion::GoodUseOfResources => {
                "Is it a good use of the limited resources available to me?"
            }
        }
    }

    /// Short hint displayed under the prompt.
    pub fn helper(&self) -> &'static str {
        match self {
            DecisionQuestion::IsHappeningNow => {
                "Consider if this is a current situation or a future hypothetical."
            }
            DecisionQuestion::ConcernsMe => {
                "Reflect if you have direct involvement or control over this situation."
            }
            DecisionQuestion::CanTakeAction => {
                "Determine if there are concrete steps you can take to address this."
            }
            DecisionQuestion::GoodUseOfResources => {
                "Consider your time, energy, and other resources."
            }
        }
    }
}

impl fmt::Display for DecisionQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prompt())
    }
}

/// Answers to the four triage questions.
///
/// Questions never reached keep their seeded `false`; a record does not
/// distinguish "answered no" from "not asked".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    pub is_happening_now: bool,
    pub concerns_me: bool,
    pub can_take_action: bool,
    pub good_use_of_resources: bool,
}

impl DecisionRecord {
    pub fn new(
        is_happening_now: bool,
        concerns_me: bool,
        can_take_action: bool,
        good_use_of_resources: bool,
    ) -> Self {
        Self {
            is_happening_now,
            concerns_me,
            can_take_action,
            good_use_of_resources,
        }
    }

    /// Returns the stored answer for a question.
    pub fn get(&self, question: DecisionQuestion) -> bool {
        match question {
            DecisionQuestion::IsHappeningNow => self.is_happening_now,
            DecisionQuestion::ConcernsMe => self.concerns_me,
            DecisionQuestion::CanTakeAction => self.can_take_action,
            DecisionQuestion::GoodUseOfResources => self.good_use_of_resources,
        }
    }

    /// Overwrites the answer for a question.
    pub fn set(&mut self, question: DecisionQuestion, answer: bool) {
        let slot = match question {
            DecisionQuestion::IsHappeningNow => &mut self.is_happening_now,
            DecisionQuestion::ConcernsMe => &mut self.concerns_me,
            DecisionQuestion::CanTakeAction => &mut self.can_take_action,
            DecisionQuestion::GoodUseOfResources => &mut self.good_use_of_resources,
        };
        *slot = answer;
    }

    /// True when every question was answered yes.
    pub fn all_yes(&self) -> bool {
        DecisionQuestion::ORDER.iter().all(|q| self.get(*q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_and_index_agree() {
        for (i, q) in DecisionQuestion::ORDER.iter().enumerate() {
            assert_eq!(q.index(), i);
            assert_eq!(DecisionQuestion::at(i), Some(*q));
        }
        assert_eq!(DecisionQuestion::at(4), None);
    }

    #[test]
    fn only_resources_question_is_last() {
        assert!(DecisionQuestion::GoodUseOfResources.is_last());
        assert!(!DecisionQuestion::CanTakeAction.is_last());
        assert_eq!(
            DecisionQuestion::ConcernsMe.next(),
            Some(DecisionQuestion::CanTakeAction)
        );
    }

    #[test]
    fn set_touches_only_its_own_field() {
        let mut record = DecisionRecord::default();
        record.set(DecisionQuestion::CanTakeAction, true);
        assert_eq!(record, DecisionRecord::new(false, false, true, false));
        assert!(record.get(DecisionQuestion::CanTakeAction));
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let record = DecisionRecord::new(true, true, false, false);
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["isHappeningNow"], true);
        assert_eq!(json["goodUseOfResources"], false);
        for q in DecisionQuestion::ORDER {
            assert!(json.get(q.key()).is_some(), "missing key {}", q.key());
        }
    }
}
