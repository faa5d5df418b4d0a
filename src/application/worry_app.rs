//! WorryApp - the single owner of every repository and flow.
//!
//! Each method is one user event, processed to completion. Callers that
//! share the app across tasks wrap it in one mutex.

use chrono::{DateTime, Local, TimeZone};
use std::sync::Arc;

use crate::domain::foundation::{SolutionId, Timestamp, ValidationError, WorryId};
use crate::domain::solution::{
    ProblemSolution, ProblemSolvingWizard, SolutionNotFound, WizardAdvance, WizardError,
    WizardStep,
};
use crate::domain::triage::WorryTimeSettings;
use crate::domain::worry::{DecisionQuestion, Worry, WorryError};
use crate::ports::KeyValueStore;

use super::repositories::{
    PersistStatus, QueueOrder, Saved, SettingsRepository, SolutionRepository, WorryRepository,
};
use super::triage_flow::{AnswerOutcome, Postponement, TriageError, TriageFlow};
use super::views::{self, HomeView, LearnView, LogView, ReflectionEntry, ScheduleView};

/// Result of a forward move in the wizard, with the write status when the
/// move committed a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardProgress {
    Moved(WizardStep),
    Finished(Saved<ProblemSolution>),
}

pub struct WorryApp {
    worries: WorryRepository,
    solutions: SolutionRepository,
    settings: SettingsRepository,
    triage: TriageFlow,
    wizard: ProblemSolvingWizard,
}

impl WorryApp {
    /// Loads every persisted collection from `store`.
    pub fn load(store: Arc<dyn KeyValueStore>, default_settings: WorryTimeSettings) -> Self {
        let app = Self {
            worries: WorryRepository::load(store.clone()),
            solutions: SolutionRepository::load(store.clone()),
            settings: SettingsRepository::load(store, default_settings),
            triage: TriageFlow::new(),
            wizard: ProblemSolvingWizard::new(),
        };
        tracing::info!(
            worries = app.worries.list().len(),
            solutions = app.solutions.list().len(),
            worry_time = %app.settings.get(),
            "worry journal loaded"
        );
        app
    }

    pub fn worries(&self) -> &WorryRepository {
        &self.worries
    }

    pub fn solutions(&self) -> &SolutionRepository {
        &self.solutions
    }

    pub fn settings(&self) -> WorryTimeSettings {
        self.settings.get()
    }

    pub fn triage(&self) -> &TriageFlow {
        &self.triage
    }

    pub fn wizard(&self) -> &ProblemSolvingWizard {
        &self.wizard
    }

    /// Draft edits never touch a repository, so the wizard is handed out
    /// directly.
    pub fn wizard_mut(&mut self) -> &mut ProblemSolvingWizard {
        &mut self.wizard
    }

    /// Most recent failed write across all repositories, if any is still
    /// outstanding.
    pub fn unsaved_notice(&self) -> Option<String> {
        self.worries
            .unsaved_notice()
            .or_else(|| self.solutions.unsaved_notice())
            .or_else(|| self.settings.unsaved_notice())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Log
    // ─────────────────────────────────────────────────────────────────────────

    pub fn log_worry(&mut self, content: &str) -> Result<Saved<Worry>, WorryError> {
        self.worries.add(content)
    }

    pub fn toggle_dealt_with(&mut self, id: WorryId) -> Result<PersistStatus, WorryError> {
        self.worries.toggle_dealt_with(id)
    }

    pub fn update_settings(
        &mut self,
        hour: u32,
        minute: u32,
        duration: u32,
    ) -> Result<PersistStatus, ValidationError> {
        self.settings.set(hour, minute, duration)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Worry time
    // ─────────────────────────────────────────────────────────────────────────

    pub fn new_queue(&self, order: QueueOrder) -> Vec<&Worry> {
        TriageFlow::new_queue(&self.worries, order)
    }

    pub fn postponed_queue(&self, order: QueueOrder) -> Vec<&Worry> {
        TriageFlow::postponed_queue(&self.worries, order)
    }

    pub fn select_worry(&mut self, id: WorryId) -> Result<DecisionQuestion, TriageError> {
        self.triage.select(&self.worries, id)
    }

    pub fn answer(&mut self, yes: bool) -> Result<AnswerOutcome, TriageError> {
        self.triage.answer(&mut self.worries, yes)
    }

    pub fn set_insights(&mut self, text: impl Into<String>) -> Result<(), TriageError> {
        self.triage.set_insights(text)
    }

    /// Postpones relative to the local wall clock.
    pub fn postpone(&mut self) -> Result<Postponement, TriageError> {
        self.postpone_at(&Local::now())
    }

    pub fn postpone_at<Tz: TimeZone>(
        &mut self,
        now: &DateTime<Tz>,
    ) -> Result<Postponement, TriageError> {
        let settings = self.settings.get();
        self.triage.postpone(&mut self.worries, &settings, now)
    }

    pub fn complete_reflection(&mut self) -> Result<PersistStatus, TriageError> {
        self.triage.complete(&mut self.worries)
    }

    pub fn cancel_triage(&mut self) {
        self.triage.cancel();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Problem solving
    // ─────────────────────────────────────────────────────────────────────────

    /// Advances the wizard, committing the record when the last step is done.
    pub fn wizard_next(&mut self) -> Result<WizardProgress, WizardError> {
        self.wizard_next_at(Timestamp::now())
    }

    pub fn wizard_next_at(&mut self, now: Timestamp) -> Result<WizardProgress, WizardError> {
        match self.wizard.next(now)? {
            WizardAdvance::Moved(step) => Ok(WizardProgress::Moved(step)),
            WizardAdvance::Finished(solution) => {
                let persist = self.solutions.add(solution.clone());
                Ok(WizardProgress::Finished(Saved {
                    value: solution,
                    persist,
                }))
            }
        }
    }

    pub fn delete_solution(&mut self, id: SolutionId) -> Result<PersistStatus, SolutionNotFound> {
        self.solutions.delete(id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────

    pub fn schedule_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> ScheduleView {
        ScheduleView::new(&self.settings.get(), now)
    }

    pub fn home(&self) -> HomeView {
        HomeView::build(&self.worries, &self.solutions, self.schedule_at(&Local::now()))
    }

    pub fn log_view(&self) -> LogView {
        LogView::build(&self.worries, self.schedule_at(&Local::now()))
    }

    pub fn past_reflections(&self) -> Vec<ReflectionEntry> {
        views::past_reflections(&self.worries)
    }

    pub fn past_solutions(&self) -> Vec<ProblemSolution> {
        views::past_solutions(&self.solutions)
    }

    pub fn learn(&self) -> LearnView {
        LearnView::content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::solution::TextField;
    use crate::ports::StoreError;

    fn app() -> (Arc<InMemoryKeyValueStore>, WorryApp) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let app = WorryApp::load(store.clone(), WorryTimeSettings::default());
        (store, app)
    }

    #[test]
    fn state_survives_reload() {
        let (store, mut app) = app();
        app.log_worry("Pay rent").unwrap();
        app.update_settings(9, 0, 15).unwrap();

        let reloaded = WorryApp::load(store, WorryTimeSettings::default());
        assert_eq!(reloaded.worries().list().len(), 1);
        assert_eq!(reloaded.settings().hour(), 9);
    }

    #[test]
    fn unsaved_notice_clears_after_successful_write() {
        let (store, mut app) = app();
        store.fail_writes_with(StoreError::QuotaExceeded);
        app.log_worry("Pay rent").unwrap();
        assert!(app.unsaved_notice().is_some());

        store.heal();
        app.log_worry("Exam").unwrap();
        assert!(app.unsaved_notice().is_none());
        assert_eq!(app.worries().list().len(), 2);
    }

    #[test]
    fn finished_wizard_lands_in_past_solutions() {
        let (_, mut app) = app();
        let wizard = app.wizard_mut();
        wizard.set_text(TextField::Worry, "Money");
        wizard.set_text(TextField::PracticalProblem, "Budget");
        wizard.add_solution("Cook at home").unwrap();
        wizard.ensure_analysis("Cook at home").unwrap();
        wizard.set_text(TextField::ChosenSolution, "Cook at home");
        wizard.add_action_step("Plan meals").unwrap();
        wizard.set_text(TextField::Progress, "Started");
        wizard.set_text(TextField::Review, "Good");

        let mut finished = None;
        for _ in 0..8 {
            if let WizardProgress::Finished(saved) = app.wizard_next().unwrap() {
                finished = Some(saved);
            }
        }

        let saved = finished.unwrap();
        assert!(saved.persist.is_saved());
        assert_eq!(app.past_solutions().len(), 1);
        assert_eq!(app.past_solutions()[0].id(), saved.value.id());

        app.delete_solution(saved.value.id()).unwrap();
        assert!(app.past_solutions().is_empty());
    }
}
