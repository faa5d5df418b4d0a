//! End-to-end scenarios against the public application API.
//!
//! These tests drive `WorryApp` the way the HTTP layer does and check the
//! persisted result by reloading from the same store.

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tempfile::TempDir;

use worry_time::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use worry_time::application::{AnswerOutcome, WizardProgress, WorryApp};
use worry_time::domain::foundation::Timestamp;
use worry_time::domain::solution::{TextField, WizardError, WizardStep};
use worry_time::domain::triage::WorryTimeSettings;
use worry_time::domain::worry::{WorryCategory, WorryStatus};
use worry_time::ports::{KeyValueStore, StoreError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn memory_app() -> (Arc<InMemoryKeyValueStore>, WorryApp) {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let app = WorryApp::load(store.clone(), WorryTimeSettings::default());
    (store, app)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn pay_rent_is_triaged_to_action_required_and_completed() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileKeyValueStore::new(temp_dir.path()));
    let mut app = WorryApp::load(store.clone(), WorryTimeSettings::default());

    let id = app.log_worry("Pay rent").unwrap().value.id();
    app.select_worry(id).unwrap();

    let mut outcome = None;
    for _ in 0..4 {
        outcome = Some(app.answer(true).unwrap());
    }
    match outcome.unwrap() {
        AnswerOutcome::Decided { category, persist } => {
            assert_eq!(category, WorryCategory::ActionRequired);
            assert!(persist.is_saved());
        }
        other => panic!("expected a decision, got {:?}", other),
    }

    app.set_insights("Set up autopay").unwrap();
    app.complete_reflection().unwrap();

    let reloaded = WorryApp::load(store, WorryTimeSettings::default());
    let worry = reloaded.worries().get(id).unwrap();
    assert_eq!(worry.status(), WorryStatus::Completed);
    assert!(worry.is_dealt_with());
    assert_eq!(worry.insights(), Some("Set up autopay"));

    let reflections = reloaded.past_reflections();
    assert_eq!(reflections.len(), 1);
    assert_eq!(reflections[0].category, Some(WorryCategory::ActionRequired));
    assert!(reloaded.log_view().worries.is_empty());
}

#[test]
fn postpone_just_before_midnight_lands_on_tomorrow_morning() {
    let (store, mut app) = memory_app();
    app.update_settings(9, 0, 15).unwrap();
    let id = app.log_worry("Exam results").unwrap().value.id();

    app.select_worry(id).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 10, 23, 59, 0).unwrap();
    let postponed = app.postpone_at(&now).unwrap();

    let expected = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 11, 9, 0, 0).unwrap());
    assert_eq!(postponed.until, expected);

    let reloaded = WorryApp::load(store, WorryTimeSettings::default());
    let worry = reloaded.worries().get(id).unwrap();
    assert_eq!(worry.status(), WorryStatus::Postponed);
    assert_eq!(worry.postponed_until(), Some(&expected));
    assert_eq!(reloaded.settings().to_string(), "09:00");
}

#[test]
fn wizard_holds_at_analysis_until_every_solution_is_analysed() {
    let (_, mut app) = memory_app();
    {
        let wizard = app.wizard_mut();
        wizard.set_text(TextField::Worry, "Money");
        wizard.set_text(TextField::PracticalProblem, "Cut $200 a month");
        wizard.add_solution("A").unwrap();
        wizard.add_solution("B").unwrap();
    }
    for _ in 0..3 {
        app.wizard_next().unwrap();
    }
    assert_eq!(app.wizard().step(), WizardStep::Analysis);

    app.wizard_mut().add_pro("A", "cheap").unwrap();
    assert_eq!(
        app.wizard_next(),
        Err(WizardError::StepIncomplete(WizardStep::Analysis))
    );
    assert_eq!(app.wizard().step(), WizardStep::Analysis);

    app.wizard_mut().ensure_analysis("B").unwrap();
    assert_eq!(
        app.wizard_next().unwrap(),
        WizardProgress::Moved(WizardStep::ChosenSolution)
    );
}

#[test]
fn failed_writes_keep_working_in_memory() {
    let (store, mut app) = memory_app();
    store.fail_writes_with(StoreError::QuotaExceeded);

    let saved = app.log_worry("Pay rent").unwrap();
    assert!(!saved.persist.is_saved());
    assert!(app.unsaved_notice().is_some());
    assert_eq!(app.log_view().worries.len(), 1);
    assert_eq!(store.read("worries").unwrap(), None);
}

#[test]
fn malformed_storage_starts_empty() {
    let store = Arc::new(
        InMemoryKeyValueStore::new()
            .with_value("worries", "not json")
            .with_value("problemSolutions", "{}")
            .with_value("worryTime", "[]"),
    );
    let app = WorryApp::load(store, WorryTimeSettings::default());

    assert!(app.worries().list().is_empty());
    assert!(app.solutions().list().is_empty());
    assert_eq!(app.settings(), WorryTimeSettings::default());
}
