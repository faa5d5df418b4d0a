//! Post-hoc classification of a triaged worry.
//!
//! Derived from the decision record every time it is displayed, never stored.

use serde::Serialize;
use std::fmt;

use super::DecisionRecord;

/// Qualitative bucket a completed worry falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorryCategory {
    ActionRequired,
    Monitor,
    FutureConsideration,
    LetGo,
}

impl WorryCategory {
    /// Classifies a decision record. Rules are checked top to bottom and the
    /// first match wins:
    ///
    /// | now | me | act | resources | category             |
    /// |-----|----|-----|-----------|----------------------|
    /// |  T  | T  |  T  |     T     | Action Required      |
    /// |  T  | T  |  *  |     *     | Monitor              |
    /// |  F  | T  |  *  |     *     | Future Consideration |
    /// |  *  | F  |  *  |     *     | Let Go               |
    pub fn classify(record: &DecisionRecord) -> Self {
        match (
            record.is_happening_now,
            record.concerns_me,
            record.can_take_action,
            record.good_use_of_resources,
        ) {
            (true, true, true, true) => WorryCategory::ActionRequired,
            (true, true, _, _) => WorryCategory::Monitor,
            (false, true, _, _) => WorryCategory::FutureConsideration,
            (_, false, _, _) => WorryCategory::LetGo,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorryCategory::ActionRequired => "Action Required",
            WorryCategory::Monitor => "Monitor",
            WorryCategory::FutureConsideration => "Future Consideration",
            WorryCategory::LetGo => "Let Go",
        }
    }
}

impl fmt::Display for WorryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(now: bool, me: bool, act: bool, res: bool) -> DecisionRecord {
        DecisionRecord::new(now, me, act, res)
    }

    #[test]
    fn all_yes_requires_action() {
        assert_eq!(
            WorryCategory::classify(&record(true, true, true, true)),
            WorryCategory::ActionRequired
        );
    }

    #[test]
    fn happening_and_mine_but_not_all_yes_is_monitor() {
        for (act, res) in [(true, false), (false, true), (false, false)] {
            assert_eq!(
                WorryCategory::classify(&record(true, true, act, res)),
                WorryCategory::Monitor
            );
        }
    }

    #[test]
    fn future_but_mine_is_future_consideration() {
        assert_eq!(
            WorryCategory::classify(&record(false, true, true, true)),
            WorryCategory::FutureConsideration
        );
    }

    #[test]
    fn not_mine_is_let_go_regardless_of_rest() {
        assert_eq!(
            WorryCategory::classify(&record(true, false, true, true)),
            WorryCategory::LetGo
        );
        assert_eq!(
            WorryCategory::classify(&DecisionRecord::default()),
            WorryCategory::LetGo
        );
    }

    #[test]
    fn labels_read_naturally() {
        assert_eq!(WorryCategory::FutureConsideration.to_string(), "Future Consideration");
    }

    fn reference_table(r: &DecisionRecord) -> WorryCategory {
        if r.is_happening_now && r.concerns_me && r.can_take_action && r.good_use_of_resources {
            WorryCategory::ActionRequired
        } else if r.is_happening_now && r.concerns_me {
            WorryCategory::Monitor
        } else if !r.is_happening_now && r.concerns_me {
            WorryCategory::FutureConsideration
        } else {
            WorryCategory::LetGo
        }
    }

    proptest! {
        #[test]
        fn classification_matches_first_match_table(
            now in any::<bool>(),
            me in any::<bool>(),
            act in any::<bool>(),
            res in any::<bool>(),
        ) {
            let r = record(now, me, act, res);
            prop_assert_eq!(WorryCategory::classify(&r), reference_table(&r));
            // Deterministic: same input, same bucket.
            prop_assert_eq!(WorryCategory::classify(&r), WorryCategory::classify(&r));
        }
    }
}
