//! Application layer - repositories, flows, and read models.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `WorryApp` is the entry point; the HTTP adapter holds exactly one.

pub mod repositories;
pub mod triage_flow;
pub mod views;
mod worry_app;

pub use repositories::{
    PersistStatus, QueueOrder, Saved, SettingsRepository, SolutionRepository, WorryRepository,
};
pub use triage_flow::{AnswerOutcome, Postponement, TriageError, TriageFlow, TriageState};
pub use views::{HomeView, LearnView, LogView, ReflectionEntry, ScheduleView};
pub use worry_app::{WizardProgress, WorryApp};
