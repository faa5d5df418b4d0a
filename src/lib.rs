//! Worry Time - a worry-postponement journal.
//!
//! Log worries as they come up, triage them during a scheduled daily worry
//! time with a four-question decision tree, and work practical ones through
//! an eight-step problem-solving wizard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
