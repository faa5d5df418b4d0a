//! Worry module - the logged concern and everything worry time attaches to it.
//!
//! - `aggregate` - `Worry` and its nested `Reflection`
//! - `status` - lifecycle status and its transition table
//! - `decision` - the four triage questions and the answer record
//! - `category` - derived classification of a decision record

mod aggregate;
mod category;
mod decision;
mod errors;
mod status;

pub use aggregate::{Reflection, Worry};
pub use category::WorryCategory;
pub use decision::{DecisionQuestion, DecisionRecord};
pub use errors::WorryError;
pub use status::WorryStatus;
