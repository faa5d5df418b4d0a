//! Triage module - what happens during worry time.
//!
//! - `decision_tree` - the four-question engine
//! - `schedule` - the daily worry-time slot and postponement target

mod decision_tree;
mod schedule;

pub use decision_tree::{DecisionTree, DecisionTreeError, TreeState, TreeStep};
pub use schedule::WorryTimeSettings;
